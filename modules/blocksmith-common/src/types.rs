use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Stance ---

/// Which side of the resolution the user argues. The search direction is
/// the opposite: an affirmative debater wants evidence *against* the
/// opponent's argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Affirmative,
    Negative,
}

impl Side {
    /// Capitalized form used in the copyable evidence block.
    pub fn label(&self) -> &'static str {
        match self {
            Side::Affirmative => "Affirmative",
            Side::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Affirmative => write!(f, "affirmative"),
            Side::Negative => write!(f, "negative"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = crate::BlocksmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "affirmative" | "aff" => Ok(Side::Affirmative),
            "negative" | "neg" => Ok(Side::Negative),
            other => Err(crate::BlocksmithError::Validation(format!(
                "Unknown side: {other} (expected affirmative or negative)"
            ))),
        }
    }
}

// --- Search types ---

/// One organic search result. Immutable once received; an empty snippet
/// means the provider returned none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCandidate {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

/// The three boolean relevance checks shown to the user as badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceVerdicts {
    pub resolution_relevant: bool,
    pub argument_relevant: bool,
    pub source_reliable: bool,
}

/// A candidate with its computed score. Exists only during selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: SearchCandidate,
    pub score: f64,
    pub verdicts: RelevanceVerdicts,
}

// --- Assembled evidence ---

/// The winning candidate dressed up for presentation: quote, citation
/// line, and a one-sentence relevance note, together with the debate
/// context it answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    pub resolution: String,
    pub side: Side,
    pub argument: String,
    pub quote: String,
    pub source: String,
    pub title: String,
    pub citation: String,
    pub relevance_note: String,
    pub verdicts: RelevanceVerdicts,
    pub retrieved_at: DateTime<Utc>,
}

impl Evidence {
    /// Render the copyable block a debater pastes into their flow.
    pub fn copy_block(&self) -> String {
        format!(
            "RESOLUTION: {}\nSIDE: {}\nRESPONDING TO: {}\n\n{}\n\nSource: {}",
            self.resolution,
            self.side.label(),
            self.argument,
            self.quote,
            self.source
        )
    }
}
