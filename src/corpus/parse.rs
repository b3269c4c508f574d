use super::CorpusError;
use crate::scoring::ScoreResult;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

const ENTRY_SEPARATOR: &str = " - ";
const ABSENT_SCORE: &str = "None";

/// One line of a corpus file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    /// 1-based line number in the source file
    pub line: usize,
    pub vector: String,
    pub expected: ScoreResult,
}

impl CorpusEntry {
    /// The entry in Red Hat form, prefixed with its expected base score.
    #[must_use]
    pub fn rh_vector(&self) -> String {
        format!("{:.1}/{}", self.expected.base, self.vector)
    }
}

/// Read and parse a corpus file.
pub fn load_corpus(path: &Path) -> Result<Vec<CorpusEntry>, CorpusError> {
    let content = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_corpus(&content)?;
    tracing::debug!("Loaded {} corpus entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse corpus text, skipping blank lines.
pub fn parse_corpus(content: &str) -> Result<Vec<CorpusEntry>, CorpusError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| parse_line(index + 1, text))
        .collect()
}

/// Parse a single `vector - (base, temporal, environmental)` line.
pub fn parse_line(line: usize, text: &str) -> Result<CorpusEntry, CorpusError> {
    let (vector, scores) = text
        .split_once(ENTRY_SEPARATOR)
        .ok_or_else(|| CorpusError::invalid_line(line, "expected \"<vector> - (<scores>)\""))?;

    let scores = scores
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| CorpusError::invalid_line(line, "scores must be parenthesized"))?;

    let fields: Vec<&str> = scores.split(',').map(str::trim).collect();
    let [base, temporal, environmental] = fields.as_slice() else {
        return Err(CorpusError::invalid_line(
            line,
            format!("expected 3 scores, found {}", fields.len()),
        ));
    };

    let base = parse_score(line, base)?
        .ok_or_else(|| CorpusError::invalid_line(line, "base score cannot be None"))?;

    Ok(CorpusEntry {
        line,
        vector: vector.trim().to_string(),
        expected: ScoreResult {
            base,
            temporal: parse_score(line, temporal)?,
            environmental: parse_score(line, environmental)?,
        },
    })
}

fn parse_score(line: usize, field: &str) -> Result<Option<Decimal>, CorpusError> {
    if field == ABSENT_SCORE {
        return Ok(None);
    }
    Decimal::from_str(field)
        .map(Some)
        .map_err(|_| CorpusError::invalid_line(line, format!("invalid score \"{field}\"")))
}
