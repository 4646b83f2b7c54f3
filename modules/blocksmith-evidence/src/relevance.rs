//! Boolean relevance checks surfaced to the user as verification badges.
//!
//! These are shallow substring heuristics over `title + " " + snippet`,
//! not semantic judgments.

use blocksmith_common::{RelevanceVerdicts, SearchCandidate};
use url::Url;

/// Tokens too common to signal topical fit.
const CONTENT_STOPWORDS: &[&str] = &["the", "and", "that", "this", "with"];

/// Domains trusted outright; anything else falls back to the https check.
const RELIABLE_DOMAINS: &[&str] = &[
    ".edu",
    ".gov",
    "nytimes.com",
    "wsj.com",
    "reuters.com",
    "bbc.com",
    "npr.org",
    "washingtonpost.com",
    "economist.com",
    "nature.com",
    "science.org",
    "jstor.org",
];

/// Lower-cased `title + " " + snippet` that every check matches against.
pub(crate) fn candidate_content(candidate: &SearchCandidate) -> String {
    format!("{} {}", candidate.title, candidate.snippet).to_lowercase()
}

/// Distinct lower-cased whitespace tokens of at least four characters,
/// minus stopwords, in first-seen order.
pub(crate) fn qualifying_tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut tokens: Vec<String> = Vec::new();
    for token in lower.split_whitespace() {
        if token.chars().count() < 4 || CONTENT_STOPWORDS.contains(&token) {
            continue;
        }
        if !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

/// How many distinct qualifying tokens of `text` occur in `content`.
pub(crate) fn matching_token_count(content: &str, text: &str) -> usize {
    qualifying_tokens(text)
        .iter()
        .filter(|token| content.contains(token.as_str()))
        .count()
}

/// At least two distinct resolution tokens must appear for a result to
/// count as on-topic.
pub fn is_relevant_to_resolution(candidate: &SearchCandidate, resolution: &str) -> bool {
    matching_token_count(&candidate_content(candidate), resolution) >= 2
}

/// A single argument token suffices. The asymmetry against the resolution
/// check is intentional: argument overlap is the primary rebuttal signal.
pub fn is_relevant_to_argument(candidate: &SearchCandidate, argument: &str) -> bool {
    matching_token_count(&candidate_content(candidate), argument) >= 1
}

/// A source is reliable when its hostname matches the trusted list, or
/// failing that when the link is at least https. Unparseable links are
/// unreliable, never an error.
pub fn is_source_reliable(candidate: &SearchCandidate) -> bool {
    if candidate.link.is_empty() {
        return false;
    }

    let host = match Url::parse(&candidate.link) {
        Ok(url) => match url.host_str() {
            Some(host) => host.to_string(),
            None => return false,
        },
        Err(_) => return false,
    };

    if RELIABLE_DOMAINS.iter().any(|domain| host.contains(domain)) {
        return true;
    }

    candidate.link.starts_with("https")
}

/// All three checks for one candidate.
pub fn verdicts(candidate: &SearchCandidate, resolution: &str, argument: &str) -> RelevanceVerdicts {
    RelevanceVerdicts {
        resolution_relevant: is_relevant_to_resolution(candidate, resolution),
        argument_relevant: is_relevant_to_argument(candidate, argument),
        source_reliable: is_source_reliable(candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str, snippet: &str, link: &str) -> SearchCandidate {
        SearchCandidate {
            title: title.to_string(),
            snippet: snippet.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn resolution_needs_two_distinct_token_matches() {
        let resolution = "Social media platforms should verify user identity";
        let one_match = candidate("Social networks", "A look at networks.", "https://a.example");
        let two_matches = candidate(
            "Social media trends",
            "How media habits changed.",
            "https://a.example",
        );
        assert!(!is_relevant_to_resolution(&one_match, resolution));
        assert!(is_relevant_to_resolution(&two_matches, resolution));
    }

    #[test]
    fn duplicate_resolution_tokens_count_once() {
        let c = candidate("Privacy report", "All about privacy.", "https://a.example");
        assert!(!is_relevant_to_resolution(&c, "privacy privacy privacy"));
    }

    #[test]
    fn argument_needs_only_one_token_match() {
        let c = candidate(
            "Data collection concerns",
            "Growing concerns about surveillance.",
            "https://a.example",
        );
        assert!(is_relevant_to_argument(&c, "mass surveillance is harmful"));
        assert!(!is_relevant_to_argument(&c, "economic growth slows"));
    }

    #[test]
    fn short_and_stopword_tokens_are_ignored() {
        let c = candidate("the and that", "this with them", "https://a.example");
        assert!(!is_relevant_to_argument(&c, "the and that this with"));
    }

    #[test]
    fn edu_and_gov_hosts_are_reliable() {
        let edu = candidate("t", "s", "http://research.stanford.edu/paper");
        let gov = candidate("t", "s", "http://data.census.gov/stats");
        assert!(is_source_reliable(&edu));
        assert!(is_source_reliable(&gov));
    }

    #[test]
    fn https_link_from_unlisted_domain_is_reliable() {
        let c = candidate("t", "s", "https://someblog.example.com/post");
        assert!(is_source_reliable(&c));
    }

    #[test]
    fn plain_http_from_unlisted_domain_is_not_reliable() {
        let c = candidate("t", "s", "http://someblog.example.com/post");
        assert!(!is_source_reliable(&c));
    }

    #[test]
    fn malformed_or_empty_links_never_panic() {
        assert!(!is_source_reliable(&candidate("t", "s", "not a url at all")));
        assert!(!is_source_reliable(&candidate("t", "s", "")));
    }
}
