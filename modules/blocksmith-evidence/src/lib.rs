//! Relevance scoring and selection for debate counter-evidence.
//!
//! Everything here is a pure function of (resolution, argument, side,
//! candidates): same inputs, same output, no I/O. The only async entry
//! point, [`find_evidence`], delegates the actual searching to the
//! [`WebSearcher`] collaborator.

pub mod block;
pub mod keywords;
pub mod query;
pub mod relevance;
pub mod selector;
pub mod traits;

pub use block::assemble;
pub use keywords::extract_keywords;
pub use query::build_query;
pub use selector::{score_candidate, score_candidates, select_best};
pub use traits::WebSearcher;

use anyhow::Result;
use blocksmith_common::{Evidence, Side};
use tracing::info;

/// End-to-end flow: build the query, run it through the searcher, pick
/// the best candidate, and assemble it. `Ok(None)` means no evidence was
/// found — an expected outcome, not an error.
pub async fn find_evidence(
    searcher: &dyn WebSearcher,
    resolution: &str,
    argument: &str,
    side: Side,
    max_results: usize,
) -> Result<Option<Evidence>> {
    let query = build_query(resolution, argument, side);
    info!(query = query.as_str(), %side, "Searching for counter-evidence");

    let candidates = searcher.search(&query, max_results).await?;
    if candidates.is_empty() {
        info!(query = query.as_str(), "No search results");
        return Ok(None);
    }

    let best = select_best(resolution, argument, &candidates);
    Ok(best.map(|scored| assemble(resolution, argument, side, &scored)))
}
