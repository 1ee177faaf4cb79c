//! Projections from raw query results to what the users table renders.

use scholaris_model::{
    Gender, GenderId, School, SchoolId, StatusId, StatusTone, User, UserId,
    UserStatus, UNKNOWN_LABEL,
};

/// Filter the raw user list by a case-insensitive search term.
///
/// A user matches when the term is a substring of the display name or the
/// email. The empty term returns the full list in server order; no
/// client-side sort is applied.
pub fn filter_users<'a>(users: &'a [User], search: &str) -> Vec<&'a User> {
    if search.is_empty() {
        return users.iter().collect();
    }
    let needle = search.to_lowercase();
    users
        .iter()
        .filter(|user| {
            user.display_name().to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Resolve a status reference to its display name.
pub fn status_label(statuses: &[UserStatus], id: StatusId) -> &str {
    statuses
        .iter()
        .find(|status| status.id == id)
        .map_or(UNKNOWN_LABEL, |status| status.name.as_str())
}

/// Presentation tone for a status reference; unresolved ids are `Other`.
pub fn status_tone(statuses: &[UserStatus], id: StatusId) -> StatusTone {
    StatusTone::from_label(status_label(statuses, id))
}

/// Resolve a school reference to its display name.
pub fn school_label(schools: &[School], id: SchoolId) -> &str {
    schools
        .iter()
        .find(|school| school.id == id)
        .map_or(UNKNOWN_LABEL, |school| school.name.as_str())
}

/// Resolve a gender reference to its display name.
pub fn gender_label(genders: &[Gender], id: GenderId) -> &str {
    genders
        .iter()
        .find(|gender| gender.id == id)
        .map_or(UNKNOWN_LABEL, |gender| gender.name.as_str())
}

/// Look up a user by id in the cached list.
pub fn find_user(users: &[User], id: UserId) -> Option<&User> {
    users.iter().find(|user| user.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholaris_model::GenderId;

    fn user(id: i64, first: &str, last: &str, email: &str) -> User {
        User {
            id: UserId(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: String::new(),
            school_id: SchoolId(1),
            status_id: StatusId(1),
            gender_id: GenderId(1),
        }
    }

    fn fixture() -> Vec<User> {
        vec![
            user(1, "Amy", "Lee", "amy@x.io"),
            user(2, "Ben", "Li", "ben@x.io"),
            user(3, "Cara", "Ng", "cara@x.io"),
        ]
    }

    #[test]
    fn empty_search_returns_full_list_in_order() {
        let users = fixture();
        let filtered = filter_users(&users, "");
        let ids: Vec<_> = filtered.iter().map(|u| u.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn search_matches_name_or_email_case_insensitively() {
        let users = fixture();
        let filtered = filter_users(&users, "li");
        let names: Vec<_> =
            filtered.iter().map(|u| u.display_name()).collect();
        assert_eq!(names, vec!["Amy Lee", "Ben Li"]);

        // Matching the email side only
        let by_email = filter_users(&users, "CARA@");
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].id, UserId(3));
    }

    #[test]
    fn search_with_no_matches_is_empty() {
        let users = fixture();
        assert!(filter_users(&users, "zzz").is_empty());
    }

    #[test]
    fn unresolved_status_renders_unknown() {
        let statuses = vec![UserStatus {
            id: StatusId(1),
            name: "Active".to_string(),
            is_active: true,
        }];
        assert_eq!(status_label(&statuses, StatusId(1)), "Active");
        assert_eq!(status_label(&statuses, StatusId(99)), "Unknown");
        assert_eq!(status_tone(&statuses, StatusId(99)), StatusTone::Other);
    }

    #[test]
    fn unresolved_school_and_gender_render_unknown() {
        assert_eq!(school_label(&[], SchoolId(5)), "Unknown");
        assert_eq!(gender_label(&[], GenderId(5)), "Unknown");
    }
}
