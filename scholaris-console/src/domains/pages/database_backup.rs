//! Backup history sample.

pub struct BackupRecord {
    pub date: &'static str,
    pub size: &'static str,
    pub kind: &'static str,
    pub status: &'static str,
}

pub fn backup_history() -> Vec<BackupRecord> {
    vec![
        BackupRecord {
            date: "2026-02-22 03:00 AM",
            size: "2.4 GB",
            kind: "Automated",
            status: "success",
        },
        BackupRecord {
            date: "2026-02-21 03:00 AM",
            size: "2.3 GB",
            kind: "Automated",
            status: "success",
        },
        BackupRecord {
            date: "2026-02-20 10:30 AM",
            size: "2.3 GB",
            kind: "Manual",
            status: "success",
        },
        BackupRecord {
            date: "2026-02-20 03:00 AM",
            size: "2.3 GB",
            kind: "Automated",
            status: "success",
        },
        BackupRecord {
            date: "2026-02-19 03:00 AM",
            size: "2.2 GB",
            kind: "Automated",
            status: "failed",
        },
    ]
}
