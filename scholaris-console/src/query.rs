//! Client-side cache of directory query results.
//!
//! One slot per query shape. Mutations never patch slots in place; the
//! update layer re-issues the affected list query and the fresh result
//! replaces the slot wholesale. Record volume is small (tens to low hundreds
//! of rows), so the simplicity wins over cache precision.

use scholaris_model::{Gender, School, User, UserStatus};

/// Lifecycle of a single query's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    /// Query issued, no response yet
    Loading,
    /// Query failed; terminal for the slot until re-issued
    Failed(String),
    /// Data available
    Ready(T),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            QueryState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn failed(&self) -> Option<&str> {
        match self {
            QueryState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Replace the slot with a settled query result.
    pub fn settle(&mut self, result: Result<T, String>) {
        *self = match result {
            Ok(data) => QueryState::Ready(data),
            Err(message) => QueryState::Failed(message),
        };
    }
}

impl<T> QueryState<Vec<T>> {
    /// The rows when ready, an empty slice otherwise.
    pub fn items(&self) -> &[T] {
        match self {
            QueryState::Ready(items) => items,
            _ => &[],
        }
    }
}

/// The four query slots backing the User Management page.
///
/// Users drive the table; schools, genders, and statuses are read-only
/// lookup tables fetched once per shell start. The slots are independent and
/// settle in whatever order the network answers.
#[derive(Debug)]
pub struct DirectoryQueries {
    pub users: QueryState<Vec<User>>,
    pub schools: QueryState<Vec<School>>,
    pub genders: QueryState<Vec<Gender>>,
    pub statuses: QueryState<Vec<UserStatus>>,
}

impl Default for DirectoryQueries {
    fn default() -> Self {
        Self {
            users: QueryState::Loading,
            schools: QueryState::Loading,
            genders: QueryState::Loading,
            statuses: QueryState::Loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_moves_loading_to_ready() {
        let mut slot: QueryState<Vec<u8>> = QueryState::Loading;
        assert!(slot.is_loading());
        slot.settle(Ok(vec![1, 2]));
        assert_eq!(slot.items(), &[1, 2]);
    }

    #[test]
    fn settle_records_failure_message() {
        let mut slot: QueryState<Vec<u8>> = QueryState::Loading;
        slot.settle(Err("connection refused".to_string()));
        assert_eq!(slot.failed(), Some("connection refused"));
        assert!(slot.items().is_empty());
    }
}
