//! Role and permission matrix.

pub struct RoleCard {
    pub name: &'static str,
    pub description: &'static str,
    pub user_count: u32,
    pub permissions: &'static [&'static str],
}

pub fn roles() -> Vec<RoleCard> {
    vec![
        RoleCard {
            name: "Super Administrator",
            description: "Full system access with all permissions",
            user_count: 3,
            permissions: &[
                "user.create",
                "user.read",
                "user.update",
                "user.delete",
                "role.manage",
                "system.config",
            ],
        },
        RoleCard {
            name: "School Administrator",
            description: "Manage school operations and staff",
            user_count: 12,
            permissions: &[
                "user.read",
                "user.update",
                "student.manage",
                "staff.manage",
                "academic.manage",
            ],
        },
        RoleCard {
            name: "Teacher",
            description: "Access to teaching and student management",
            user_count: 156,
            permissions: &[
                "student.read",
                "class.manage",
                "grade.manage",
                "attendance.manage",
            ],
        },
        RoleCard {
            name: "Staff",
            description: "Limited access to specific modules",
            user_count: 45,
            permissions: &["student.read", "report.view"],
        },
    ]
}
