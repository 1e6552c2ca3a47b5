use serde::Deserialize;

use crate::error::ResultSetError;

use super::sentiment::Sentiment;

/// One analyzed CSV row, kept in the order the service returned it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisRecord {
    pub id: i64,
    pub text: String,
    pub sentiment: Sentiment,
    /// Passed through from the CSV's `timestamp` column; null when the
    /// column is missing, so the value is opaque to the client.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Aggregate counts reported alongside the per-row results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SentimentCounts {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl SentimentCounts {
    #[must_use]
    pub fn total(self) -> u32 {
        self.positive + self.neutral + self.negative
    }

    #[must_use]
    pub fn count(self, sentiment: Sentiment) -> u32 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}

/// The full outcome of one successful analysis call.
///
/// Replaced wholesale by the next successful call, never merged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultSet {
    pub statistics: SentimentCounts,
    pub results: Vec<AnalysisRecord>,
}

impl ResultSet {
    /// A result set is atomic: the aggregate counts must cover exactly the
    /// returned rows, otherwise the whole payload is rejected.
    ///
    /// # Errors
    ///
    /// Returns `ResultSetError::CountMismatch` when counts and rows disagree.
    pub fn validate(&self) -> Result<(), ResultSetError> {
        let counted = self.statistics.total() as usize;
        if counted != self.results.len() {
            return Err(ResultSetError::CountMismatch {
                counted,
                rows: self.results.len(),
            });
        }
        Ok(())
    }
}
