use serde::{Deserialize, Serialize};

/// Request body for the `/search` endpoint.
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub q: &'a str,
    pub num: usize,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
}

/// One organic Google result. Serper omits fields it has no data for,
/// so everything is defaulted.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
}
