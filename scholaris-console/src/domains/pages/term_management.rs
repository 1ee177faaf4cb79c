//! Term list for the active academic year.

pub struct Term {
    pub name: &'static str,
    pub year: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub status: &'static str,
}

pub fn terms() -> Vec<Term> {
    vec![
        Term {
            name: "Fall Semester",
            year: "2024-2025",
            start_date: "Sep 1, 2024",
            end_date: "Dec 20, 2024",
            status: "completed",
        },
        Term {
            name: "Spring Semester",
            year: "2024-2025",
            start_date: "Jan 8, 2025",
            end_date: "May 30, 2025",
            status: "active",
        },
        Term {
            name: "Summer Term",
            year: "2024-2025",
            start_date: "Jun 5, 2025",
            end_date: "Aug 15, 2025",
            status: "upcoming",
        },
    ]
}
