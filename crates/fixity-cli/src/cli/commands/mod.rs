//! CLI command handlers. Each command is in its own file.

mod agent;
mod check;
mod hash;

pub use agent::run_agent;
pub use check::run_check;
pub use hash::run_hash;
