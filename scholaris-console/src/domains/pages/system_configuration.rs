//! System configuration form values (display only).

pub struct ConfigEntry {
    pub section: &'static str,
    pub key: &'static str,
    pub value: &'static str,
}

pub fn config_entries() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry {
            section: "General",
            key: "System Name",
            value: "EduAdmin School Management System",
        },
        ConfigEntry {
            section: "General",
            key: "Session Timeout",
            value: "30 minutes",
        },
        ConfigEntry {
            section: "Database",
            key: "Connection String",
            value: "postgresql://localhost:5432/school_db",
        },
        ConfigEntry {
            section: "Database",
            key: "Max Connections",
            value: "100",
        },
        ConfigEntry {
            section: "Backup",
            key: "Retention Days",
            value: "30",
        },
        ConfigEntry {
            section: "Backup",
            key: "Daily Schedule",
            value: "03:00 AM",
        },
        ConfigEntry {
            section: "Security",
            key: "Password Min Length",
            value: "5",
        },
    ]
}
