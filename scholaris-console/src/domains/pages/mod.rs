//! Static demo pages.
//!
//! Everything under here renders fixed sample arrays; none of it talks to
//! the directory service. The user management page is the only live one and
//! lives in its own domain.

pub mod academic_year;
pub mod dashboard;
pub mod database_backup;
pub mod role_permissions;
pub mod school_management;
pub mod security_access;
pub mod staff_management;
pub mod student_management;
pub mod system_configuration;
pub mod technical_support;
pub mod term_management;
