use super::CorpusEntry;
use crate::error::Cvss2Error;
use crate::scoring::ScoreResult;
use crate::Cvss2;
use rayon::prelude::*;

/// How corpus vectors are fed to the parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorpusMode {
    /// Parse the vector as is
    #[default]
    Plain,
    /// Prefix the expected base score and parse as a Red Hat vector
    RedHat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Scores differ from the expected ones
    Mismatch {
        expected: ScoreResult,
        actual: ScoreResult,
    },
    /// The vector was rejected
    Rejected(Cvss2Error),
}

/// A corpus entry that did not verify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFailure {
    pub line: usize,
    pub vector: String,
    pub kind: FailureKind,
}

/// Outcome of verifying one corpus.
#[derive(Debug, Clone, Default)]
pub struct CorpusReport {
    /// Source label, usually the file path
    pub source: String,
    pub checked: usize,
    pub failures: Vec<CorpusFailure>,
}

impl CorpusReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.checked - self.failures.len()
    }

    /// Entries whose scores differ
    #[must_use]
    pub fn mismatches(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| matches!(f.kind, FailureKind::Mismatch { .. }))
            .count()
    }

    /// Entries the parser refused
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.failures.len() - self.mismatches()
    }
}

/// Verify every entry against the calculator in parallel.
///
/// Failures are returned in corpus order.
#[must_use]
pub fn verify_entries(
    source: impl Into<String>,
    entries: &[CorpusEntry],
    mode: CorpusMode,
) -> CorpusReport {
    let source = source.into();
    let failures: Vec<CorpusFailure> = entries
        .par_iter()
        .filter_map(|entry| verify_entry(entry, mode))
        .collect();

    tracing::info!(
        "Checked {} vectors from {}: {} failed",
        entries.len(),
        source,
        failures.len()
    );

    CorpusReport {
        source,
        checked: entries.len(),
        failures,
    }
}

fn verify_entry(entry: &CorpusEntry, mode: CorpusMode) -> Option<CorpusFailure> {
    let parsed = match mode {
        CorpusMode::Plain => Cvss2::new(entry.vector.as_str()),
        CorpusMode::RedHat => Cvss2::from_rh_vector(&entry.rh_vector()),
    };

    let kind = match parsed {
        Ok(cvss) if cvss.score_result() == entry.expected => return None,
        Ok(cvss) => FailureKind::Mismatch {
            expected: entry.expected,
            actual: cvss.score_result(),
        },
        Err(err) => FailureKind::Rejected(err),
    };

    tracing::debug!(line = entry.line, vector = %entry.vector, "corpus entry failed");
    Some(CorpusFailure {
        line: entry.line,
        vector: entry.vector.clone(),
        kind,
    })
}
