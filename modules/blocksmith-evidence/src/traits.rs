use anyhow::Result;
use async_trait::async_trait;
use blocksmith_common::SearchCandidate;

/// The external search collaborator. The scoring core never performs I/O
/// itself; callers hand it the results this capability returns.
#[async_trait]
pub trait WebSearcher: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchCandidate>>;
}
