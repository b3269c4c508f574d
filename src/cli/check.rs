//! `check` command handler.
//!
//! Verifies oracle corpus files against the calculator.

use super::exit_codes;
use crate::config::AppConfig;
use crate::corpus::{load_corpus, verify_entries, CorpusMode, CorpusReport};
use crate::output::{should_use_color, write_output, OutputTarget};
use crate::reports::create_reporter_with_options;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Verify each corpus file in turn.
///
/// With `fail_fast`, files after the first one with failures are skipped.
pub fn check_files(
    files: &[PathBuf],
    mode: CorpusMode,
    config: &AppConfig,
) -> Result<Vec<CorpusReport>> {
    let pool = build_pool(config.check.threads)?;
    let mut reports = Vec::with_capacity(files.len());

    for path in files {
        let entries = load_corpus(path)?;
        let source = path.display().to_string();
        let report = match &pool {
            Some(pool) => pool.install(|| verify_entries(source, &entries, mode)),
            None => verify_entries(source, &entries, mode),
        };
        let failed = !report.is_success();
        reports.push(report);

        if failed && config.check.fail_fast {
            tracing::info!("Stopping after {} (fail fast)", path.display());
            break;
        }
    }

    Ok(reports)
}

fn build_pool(threads: usize) -> Result<Option<rayon::ThreadPool>> {
    if threads == 0 {
        return Ok(None);
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("failed to start verification threads")?;
    Ok(Some(pool))
}

/// Run the `check` command, returning the desired exit code.
pub fn run_check(files: &[PathBuf], mode: CorpusMode, config: &AppConfig) -> Result<i32> {
    let reports = check_files(files, mode, config)?;

    let target = OutputTarget::from_option(config.output.file.clone());
    let reporter = create_reporter_with_options(
        config.output.format,
        should_use_color(config.output.no_color, &target),
    );
    let output = reporter
        .generate_check_report(&reports, &config.report_config())
        .context("failed to generate report")?;
    write_output(&output, &target)?;

    if reports.iter().all(CorpusReport::is_success) {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::INVALID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_corpus(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_check_files() {
        let tmp = TempDir::new().unwrap();
        let good = write_corpus(&tmp, "good", "AV:N/AC:L/Au:N/C:P/I:P/A:P - (7.5, None, None)\n");
        let bad = write_corpus(&tmp, "bad", "AV:N/AC:L/Au:N/C:P/I:P/A:P - (7.0, None, None)\n");

        let config = AppConfig::default();
        let reports = check_files(&[bad.clone(), good.clone()], CorpusMode::Plain, &config).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(!reports[0].is_success());
        assert!(reports[1].is_success());

        let mut fail_fast = AppConfig::default();
        fail_fast.check.fail_fast = true;
        fail_fast.check.threads = 2;
        let reports = check_files(&[bad, good], CorpusMode::Plain, &fail_fast).unwrap();
        assert_eq!(reports.len(), 1);
    }

    #[test]
    fn test_check_files_missing_file() {
        let err = check_files(
            &[PathBuf::from("/nonexistent/vectors")],
            CorpusMode::Plain,
            &AppConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/vectors"));
    }

    #[test]
    fn test_run_check_exit_codes() {
        let tmp = TempDir::new().unwrap();
        let good = write_corpus(&tmp, "good", "AV:N/AC:M/Au:N/C:N/I:P/A:N - (4.3, None, None)\n");
        let bad = write_corpus(&tmp, "bad", "AV:N/AC:M/Au:N/C:N/I:P/A:N - (4.3, 4.3, None)\n");

        let mut config = AppConfig::default();
        config.output.file = Some(tmp.path().join("report.txt"));

        assert_eq!(
            run_check(&[good], CorpusMode::RedHat, &config).unwrap(),
            exit_codes::SUCCESS
        );
        assert_eq!(
            run_check(&[bad], CorpusMode::Plain, &config).unwrap(),
            exit_codes::INVALID
        );
    }
}
