use anyhow::Result;
use async_trait::async_trait;
use blocksmith_common::SearchCandidate;
use blocksmith_evidence::WebSearcher;
use serper_client::SerperClient;

/// Serper-backed implementation of the search collaborator.
pub struct SerperSearcher {
    client: SerperClient,
}

impl SerperSearcher {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: SerperClient::new(api_key),
        }
    }
}

#[async_trait]
impl WebSearcher for SerperSearcher {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchCandidate>> {
        let organic = self.client.search(query, max_results).await?;
        Ok(organic
            .into_iter()
            .map(|result| SearchCandidate {
                title: result.title,
                snippet: result.snippet,
                link: result.link,
            })
            .collect())
    }
}
