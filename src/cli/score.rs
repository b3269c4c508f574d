//! `score` and `rh` command handlers.

use super::exit_codes;
use crate::config::AppConfig;
use crate::output::{should_use_color, write_output, OutputTarget};
use crate::reports::{create_reporter_with_options, VectorReport};
use crate::Cvss2;
use anyhow::{Context, Result};

/// How command-line vectors are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorInput {
    /// `AV:N/AC:L/...`
    Plain,
    /// `<score>/AV:N/AC:L/...`
    RedHat,
}

/// Parse and score each input, keeping failures alongside successes.
#[must_use]
pub fn score_vectors(inputs: &[String], input: VectorInput) -> Vec<VectorReport> {
    inputs
        .iter()
        .map(|text| {
            let outcome = match input {
                VectorInput::Plain => Cvss2::new(text.as_str()),
                VectorInput::RedHat => Cvss2::from_rh_vector(text),
            };
            if let Err(err) = &outcome {
                tracing::debug!("Rejected {text}: {}", err.detailed_message());
            }
            VectorReport::new(text.as_str(), outcome)
        })
        .collect()
}

/// Run the `score` or `rh` command, returning the desired exit code.
pub fn run_score(inputs: &[String], input: VectorInput, config: &AppConfig) -> Result<i32> {
    let reports = score_vectors(inputs, input);

    let target = OutputTarget::from_option(config.output.file.clone());
    let reporter = create_reporter_with_options(
        config.output.format,
        should_use_color(config.output.no_color, &target),
    );
    let output = reporter
        .generate_vector_report(&reports, &config.report_config())
        .context("failed to generate report")?;
    write_output(&output, &target)?;

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    if invalid > 0 {
        tracing::info!("{invalid} of {} vectors rejected", reports.len());
        return Ok(exit_codes::INVALID);
    }
    Ok(exit_codes::SUCCESS)
}
