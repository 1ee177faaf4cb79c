pub mod messages;

pub use messages::{AppMessage, DirectoryCommand, DomainUpdateResult, Effect};
