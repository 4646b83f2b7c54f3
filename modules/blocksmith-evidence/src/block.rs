//! Assembly of a scored candidate into presentable evidence.

use blocksmith_common::{Evidence, ScoredCandidate, Side};
use chrono::Utc;
use url::Url;

/// Dress the winning candidate up for display: quote, citation line, and
/// a one-sentence relevance note tying it back to the debate context.
pub fn assemble(
    resolution: &str,
    argument: &str,
    side: Side,
    scored: &ScoredCandidate,
) -> Evidence {
    let candidate = &scored.candidate;

    let quote = if candidate.snippet.is_empty() {
        "No quote available".to_string()
    } else {
        candidate.snippet.clone()
    };

    let citation = if candidate.title.is_empty() {
        format!("Retrieved from {}", candidate.link)
    } else {
        format!("{}. Retrieved from {}", candidate.title, candidate.link)
    };

    let hostname = Url::parse(&candidate.link)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| "an unknown source".to_string());
    let relevance_note = format!(
        "This evidence from {hostname} appears relevant to your search for {side} evidence \
         regarding \"{argument}\" in the context of \"{resolution}\"."
    );

    Evidence {
        resolution: resolution.to_string(),
        side,
        argument: argument.to_string(),
        quote,
        source: candidate.link.clone(),
        title: candidate.title.clone(),
        citation,
        relevance_note,
        verdicts: scored.verdicts,
        retrieved_at: Utc::now(),
    }
}
