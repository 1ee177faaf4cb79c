//! Academic year timeline.

pub struct AcademicYear {
    pub year: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub status: &'static str,
    pub progress: u8,
}

pub fn academic_years() -> Vec<AcademicYear> {
    vec![
        AcademicYear {
            year: "2025-2026",
            start_date: "Sep 1, 2025",
            end_date: "Jun 30, 2026",
            status: "upcoming",
            progress: 0,
        },
        AcademicYear {
            year: "2024-2025",
            start_date: "Sep 1, 2024",
            end_date: "Jun 30, 2025",
            status: "active",
            progress: 65,
        },
        AcademicYear {
            year: "2023-2024",
            start_date: "Sep 1, 2023",
            end_date: "Jun 30, 2024",
            status: "completed",
            progress: 100,
        },
    ]
}
