//! Wire contracts and HTTP client for the Scholaris directory service.
//!
//! The directory service is the system of record for users, schools, and the
//! gender/status lookup tables. Everything here speaks its versioned JSON
//! API; the console consumes it exclusively through the [`DirectoryService`]
//! trait so tests can substitute the transport.

pub mod client;
pub mod error;
pub mod routes;
pub mod service;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use service::{DirectoryService, HttpDirectoryService};
pub use types::{ApiResponse, CreateUserRequest, UpdateUserRequest, UserInput};
