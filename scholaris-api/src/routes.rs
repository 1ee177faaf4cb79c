macro_rules! v1_path {
    ($path:literal) => {
        concat!("/api/v1", $path)
    };
}

/// Versioned API route definitions for the directory service
pub mod v1 {
    pub const ROOT: &str = "/api/v1";
    pub const VERSION: &str = "v1";

    pub mod directory {
        pub const USERS: &str = v1_path!("/directory/users");
        pub const USER_ITEM: &str = v1_path!("/directory/users/{id}");
        pub const SCHOOLS: &str = v1_path!("/directory/schools");
        pub const GENDERS: &str = v1_path!("/directory/genders");
        pub const USER_STATUSES: &str = v1_path!("/directory/user-statuses");
    }
}

/// Helpers for working with parameterized routes
pub mod utils {
    /// Replace a single `{param}` placeholder in a route.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_item_route_substitutes_id() {
        let path =
            utils::replace_param(v1::directory::USER_ITEM, "{id}", "42");
        assert_eq!(path, "/api/v1/directory/users/42");
    }
}
