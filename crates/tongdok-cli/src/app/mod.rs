//! Application-level plumbing for the Tongdok CLI.
//!
//! - Config and database path resolution
//! - The per-invocation [`AppContext`]

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::resolve_config_path;
