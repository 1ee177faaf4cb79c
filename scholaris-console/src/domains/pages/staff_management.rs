//! Staff roster sample.

pub struct StaffRow {
    pub name: &'static str,
    pub role: &'static str,
    pub department: &'static str,
    pub email: &'static str,
    pub status: &'static str,
}

pub fn staff() -> Vec<StaffRow> {
    vec![
        StaffRow {
            name: "Dr. Robert Smith",
            role: "Principal",
            department: "Administration",
            email: "robert@school.edu",
            status: "active",
        },
        StaffRow {
            name: "Jennifer Lee",
            role: "Mathematics Teacher",
            department: "Academics",
            email: "jennifer@school.edu",
            status: "active",
        },
        StaffRow {
            name: "Carlos Rodriguez",
            role: "Science Teacher",
            department: "Academics",
            email: "carlos@school.edu",
            status: "active",
        },
        StaffRow {
            name: "Amanda White",
            role: "IT Administrator",
            department: "Technology",
            email: "amanda@school.edu",
            status: "active",
        },
        StaffRow {
            name: "Thomas Anderson",
            role: "Librarian",
            department: "Library",
            email: "thomas@school.edu",
            status: "inactive",
        },
    ]
}
