use serde::{Deserialize, Serialize};

/// Sentiment category assigned to one analyzed row.
///
/// The lowercase serde names are the wire strings the analysis endpoint
/// emits; [`Sentiment::ORDERED`] is the fixed display order used by the
/// chart and the statistics row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All categories in display order: positive, neutral, negative.
    pub const ORDERED: [Self; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }

    /// Lowercase wire name, also used as a CSS hook.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}
