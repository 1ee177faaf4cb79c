//! Strongly typed identifiers for directory records.
//!
//! The Remote Directory Service assigns plain integer ids; the newtypes keep
//! a school id from being handed to an operation that expects a user id.

use serde::{Deserialize, Serialize};

/// Strongly typed ID for user records
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for schools
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct SchoolId(pub i64);

impl SchoolId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for SchoolId {
    fn from(id: i64) -> Self {
        SchoolId(id)
    }
}

impl std::fmt::Display for SchoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for gender lookup entries
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct GenderId(pub i64);

impl GenderId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for GenderId {
    fn from(id: i64) -> Self {
        GenderId(id)
    }
}

impl std::fmt::Display for GenderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for user-status lookup entries
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct StatusId(pub i64);

impl StatusId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for StatusId {
    fn from(id: i64) -> Self {
        StatusId(id)
    }
}

impl std::fmt::Display for StatusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
