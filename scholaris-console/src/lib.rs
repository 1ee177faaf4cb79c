//! Scholaris administrative console.
//!
//! A sidebar-navigated terminal shell for a school-management platform. The
//! User Management page talks to the Remote Directory Service through
//! [`scholaris_api::DirectoryService`]; every other page renders static demo
//! data. State lives in plain structs updated by domain messages; network
//! work is described as effects and executed by the tokio-backed runtime in
//! [`runtime`].

pub mod common;
pub mod config;
pub mod domains;
pub mod notify;
pub mod query;
pub mod runtime;
pub mod shell;

pub use config::Config;
