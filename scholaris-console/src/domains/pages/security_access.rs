//! Security posture sample.

pub struct SecurityMetric {
    pub label: &'static str,
    pub value: u32,
    pub status: &'static str,
}

pub struct WhitelistEntry {
    pub ip: &'static str,
    pub description: &'static str,
    pub added_date: &'static str,
}

pub fn security_metrics() -> Vec<SecurityMetric> {
    vec![
        SecurityMetric {
            label: "Failed Login Attempts",
            value: 12,
            status: "warning",
        },
        SecurityMetric {
            label: "Active Sessions",
            value: 145,
            status: "normal",
        },
        SecurityMetric {
            label: "Suspicious Activity",
            value: 3,
            status: "alert",
        },
        SecurityMetric {
            label: "2FA Enabled Users",
            value: 87,
            status: "good",
        },
    ]
}

pub fn ip_whitelist() -> Vec<WhitelistEntry> {
    vec![
        WhitelistEntry {
            ip: "192.168.1.100",
            description: "Office Network",
            added_date: "2025-01-15",
        },
        WhitelistEntry {
            ip: "10.0.0.50",
            description: "VPN Gateway",
            added_date: "2025-01-20",
        },
        WhitelistEntry {
            ip: "172.16.0.1",
            description: "Admin Workstation",
            added_date: "2025-02-01",
        },
    ]
}
