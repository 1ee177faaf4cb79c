//! School overview cards.

pub struct SchoolCard {
    pub name: &'static str,
    pub location: &'static str,
    pub students: u32,
    pub staff: u32,
    pub status: &'static str,
}

pub fn schools() -> Vec<SchoolCard> {
    vec![
        SchoolCard {
            name: "Central High School",
            location: "New York, NY",
            students: 1245,
            staff: 87,
            status: "active",
        },
        SchoolCard {
            name: "Riverside Academy",
            location: "Los Angeles, CA",
            students: 856,
            staff: 62,
            status: "active",
        },
        SchoolCard {
            name: "Mountain View School",
            location: "Denver, CO",
            students: 645,
            staff: 48,
            status: "inactive",
        },
        SchoolCard {
            name: "Lakeside Institute",
            location: "Chicago, IL",
            students: 1089,
            staff: 75,
            status: "active",
        },
    ]
}
