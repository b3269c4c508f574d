//! **A library for parsing and scoring CVSS v2 vectors.**
//!
//! `cvss2-tools` parses CVSS2 vector strings such as `AV:N/AC:L/Au:N/C:P/I:P/A:P`,
//! validates them against the CVSS v2 metric table, and computes the Base,
//! Temporal and Environmental scores with the published equations. Scores are
//! computed in exact decimal arithmetic and rounded half away from zero to one
//! decimal place, so they match reference calculators digit for digit.
//!
//! ## Core Concepts & Modules
//!
//! - **[`metrics`]**: The static CVSS2 metric table: abbreviations, allowed
//!   values, weights and defaults.
//! - **[`vector`]**: Parsing raw vector text into a [`MetricSet`], rendering the
//!   canonical clean vector, and the Red Hat `<score>/<vector>` form.
//! - **[`scoring`]**: The Base, Temporal and Environmental equations.
//! - **[`Cvss2`]**: A parsed and scored vector tying the above together.
//! - **[`corpus`]**: Bulk verification of oracle files of vectors and expected scores.
//! - **[`reports`]**: Text and CVSS v2.0 JSON output.
//!
//! ## Getting Started
//!
//! ```
//! use cvss2_tools::Cvss2;
//!
//! let cvss = Cvss2::new("AV:N/AC:L/Au:N/C:N/I:N/A:C/E:F/RL:OF/RC:C/CDP:ND")?;
//! assert_eq!(cvss.scores(), (7.8, Some(6.4), None));
//! assert_eq!(cvss.clean_vector(), "AV:N/AC:L/Au:N/C:N/I:N/A:C/E:F/RL:OF/RC:C");
//! assert_eq!(cvss.rh_vector(), "7.8/AV:N/AC:L/Au:N/C:N/I:N/A:C/E:F/RL:OF/RC:C");
//! # Ok::<(), cvss2_tools::Cvss2Error>(())
//! ```
//!
//! ### Handling errors
//!
//! Every failure is one of four kinds, available through [`Cvss2Error::kind`]:
//!
//! ```
//! use cvss2_tools::{Cvss2, ErrorKind};
//!
//! let err = Cvss2::new("AV:L/AC:L/Au:M/C:C/I:P").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Mandatory);
//!
//! let err = Cvss2::from_rh_vector("3.8/AV:L/AC:H/Au:M/C:C/I:N/A:N").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::RhScoreMismatch);
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `cvss2` binary scores vectors, parses Red Hat style vectors and verifies
//! corpus files. Run `cvss2 --help` for details.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Score mantissas are tiny; i128 -> f64 is exact
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod corpus;
mod cvss2;
pub mod error;
pub mod metrics;
pub mod output;
pub mod reports;
pub mod scoring;
pub mod vector;

// Re-export main types for convenience
pub use config::{AppConfig, CheckConfig, ConfigError, OutputConfig, Validatable};
pub use cvss2::Cvss2;
pub use error::{Cvss2Error, ErrorKind, MalformedReason, Result, RhMalformedReason};
pub use metrics::{Metric, MetricGroup};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{compute, ScoreResult, Severity};
pub use vector::{clean_vector, from_rh_vector, parse_vector, MetricSet};
