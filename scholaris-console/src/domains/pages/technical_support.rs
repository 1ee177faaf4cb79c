//! Support ticket board sample.

pub struct Ticket {
    pub id: &'static str,
    pub title: &'static str,
    pub status: &'static str,
    pub priority: &'static str,
    pub assignee: &'static str,
    pub created: &'static str,
}

pub struct ServiceHealth {
    pub service: &'static str,
    pub status: &'static str,
    pub uptime: &'static str,
}

pub fn tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "TKT-001",
            title: "Database connection timeout",
            status: "open",
            priority: "high",
            assignee: "John Smith",
            created: "2 hours ago",
        },
        Ticket {
            id: "TKT-002",
            title: "User unable to login",
            status: "in-progress",
            priority: "medium",
            assignee: "Sarah Johnson",
            created: "5 hours ago",
        },
        Ticket {
            id: "TKT-003",
            title: "Report generation slow",
            status: "open",
            priority: "low",
            assignee: "Unassigned",
            created: "1 day ago",
        },
        Ticket {
            id: "TKT-004",
            title: "Email notification not sending",
            status: "resolved",
            priority: "high",
            assignee: "Mike Wilson",
            created: "2 days ago",
        },
        Ticket {
            id: "TKT-005",
            title: "UI display issue on mobile",
            status: "in-progress",
            priority: "medium",
            assignee: "Emma Davis",
            created: "3 days ago",
        },
    ]
}

pub fn service_health() -> Vec<ServiceHealth> {
    vec![
        ServiceHealth {
            service: "Web Server",
            status: "operational",
            uptime: "99.9%",
        },
        ServiceHealth {
            service: "Database",
            status: "operational",
            uptime: "99.7%",
        },
        ServiceHealth {
            service: "Email Service",
            status: "degraded",
            uptime: "95.2%",
        },
        ServiceHealth {
            service: "API Gateway",
            status: "operational",
            uptime: "99.5%",
        },
    ]
}
