//! Overview page: headline stats and recent activity.

pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub struct Activity {
    pub user: &'static str,
    pub action: &'static str,
    pub time: &'static str,
}

pub struct SeriesPoint {
    pub label: &'static str,
    pub value: u64,
}

pub fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard { title: "Total Users", value: "2,680", change: "+12.5%" },
        StatCard { title: "Active Schools", value: "4", change: "+1" },
        StatCard { title: "Students", value: "3,835", change: "+8.2%" },
        StatCard { title: "Staff Members", value: "272", change: "+3.1%" },
    ]
}

pub fn recent_activities() -> Vec<Activity> {
    vec![
        Activity {
            user: "John Smith",
            action: "Updated student record",
            time: "2 minutes ago",
        },
        Activity {
            user: "Sarah Johnson",
            action: "Created new academic year",
            time: "15 minutes ago",
        },
        Activity {
            user: "Mike Wilson",
            action: "Assigned teacher to Class 10A",
            time: "1 hour ago",
        },
        Activity {
            user: "Emma Davis",
            action: "Generated fee invoices",
            time: "2 hours ago",
        },
        Activity {
            user: "System",
            action: "Automated backup completed",
            time: "3 hours ago",
        },
    ]
}

pub fn user_growth() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint { label: "Jan", value: 1200 },
        SeriesPoint { label: "Feb", value: 1450 },
        SeriesPoint { label: "Mar", value: 1680 },
        SeriesPoint { label: "Apr", value: 1920 },
        SeriesPoint { label: "May", value: 2340 },
        SeriesPoint { label: "Jun", value: 2680 },
    ]
}

pub fn attendance_rate() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint { label: "Mon", value: 92 },
        SeriesPoint { label: "Tue", value: 95 },
        SeriesPoint { label: "Wed", value: 89 },
        SeriesPoint { label: "Thu", value: 94 },
        SeriesPoint { label: "Fri", value: 88 },
        SeriesPoint { label: "Sat", value: 85 },
    ]
}
