// Application Layer - Use Cases

pub mod user;

// Re-exports
pub use user::{DebugSnapshot, UserService};
