//! CLI command handlers.
//!
//! Handlers are invoked by main.rs and return the process exit code.

mod check;
mod score;

pub use check::{check_files, run_check};
pub use score::{run_score, score_vectors, VectorInput};

/// Exit codes for the cvss2 binary
pub mod exit_codes {
    /// All vectors valid, all corpus entries verified
    pub const SUCCESS: i32 = 0;
    /// An invalid vector or a corpus mismatch
    pub const INVALID: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
