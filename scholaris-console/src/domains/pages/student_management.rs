//! Student roster sample.

pub struct StudentRow {
    pub name: &'static str,
    pub grade: &'static str,
    pub class: &'static str,
    pub enrollment: &'static str,
    pub status: &'static str,
}

pub fn students() -> Vec<StudentRow> {
    vec![
        StudentRow {
            name: "Emily Johnson",
            grade: "Grade 10",
            class: "10-A",
            enrollment: "ENR2024001",
            status: "active",
        },
        StudentRow {
            name: "Michael Chen",
            grade: "Grade 10",
            class: "10-B",
            enrollment: "ENR2024002",
            status: "active",
        },
        StudentRow {
            name: "Sophia Williams",
            grade: "Grade 9",
            class: "9-A",
            enrollment: "ENR2024003",
            status: "active",
        },
        StudentRow {
            name: "James Martinez",
            grade: "Grade 11",
            class: "11-C",
            enrollment: "ENR2024004",
            status: "inactive",
        },
        StudentRow {
            name: "Olivia Brown",
            grade: "Grade 12",
            class: "12-A",
            enrollment: "ENR2024005",
            status: "active",
        },
    ]
}
