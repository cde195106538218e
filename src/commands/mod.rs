//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod flatten;
pub mod process;
pub mod rank;
pub mod utils;

// Re-export main command functions
pub use flatten::{execute_flatten, FlattenArgs};
pub use process::{execute_process, validate_args, ProcessArgs};
pub use rank::{execute_rank, RankArgs};
pub use utils::{display_schema, validate_output_file};
