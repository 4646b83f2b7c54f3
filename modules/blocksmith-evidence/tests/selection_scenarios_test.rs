//! Scenario-driven selection tests.
//!
//! Pure functions plus a hand-rolled fake searcher — no network, no
//! infrastructure. Exercises the full query → search → select → assemble
//! flow against realistic debate inputs.
//!
//! Run with: cargo test -p blocksmith-evidence --test selection_scenarios_test

use anyhow::Result;
use async_trait::async_trait;
use blocksmith_common::{SearchCandidate, Side};
use blocksmith_evidence::{build_query, extract_keywords, find_evidence, select_best, WebSearcher};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const RESOLUTION: &str = "Resolved: Social media platforms should verify user identity";
const ARGUMENT: &str = "this violates privacy rights";

fn candidate(title: &str, snippet: &str, link: &str) -> SearchCandidate {
    SearchCandidate {
        title: title.to_string(),
        snippet: snippet.to_string(),
        link: link.to_string(),
    }
}

/// Fake collaborator returning a canned result list.
struct FixedSearcher {
    results: Vec<SearchCandidate>,
}

#[async_trait]
impl WebSearcher for FixedSearcher {
    async fn search(&self, _query: &str, max_results: usize) -> Result<Vec<SearchCandidate>> {
        Ok(self.results.iter().take(max_results).cloned().collect())
    }
}

// ---------------------------------------------------------------------------
// Query building
// ---------------------------------------------------------------------------

#[test]
fn affirmative_query_uses_the_against_direction() {
    let query = build_query(RESOLUTION, ARGUMENT, Side::Affirmative);
    assert!(
        query.starts_with("evidence against"),
        "affirmative debaters rebut their opponent, query: {query}"
    );
}

#[test]
fn query_stays_within_sixty_chars_for_long_inputs() {
    let resolution = "Resolved: standardized testing requirements disadvantage socioeconomically \
                      underprivileged students disproportionately";
    let argument = "standardized assessments provide objective comparable measurements";
    let query = build_query(resolution, argument, Side::Negative);
    assert!(query.chars().count() <= 60, "query: {query}");
}

#[test]
fn keyword_extraction_is_idempotent_on_filtered_output() {
    let first = extract_keywords(RESOLUTION, 4);
    let rejoined = first.join(" ");
    assert_eq!(extract_keywords(&rejoined, 4), first);
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[test]
fn selection_always_returns_a_supplied_candidate() {
    let candidates = vec![
        candidate("Alpha", "Unrelated text.", "http://alpha.example"),
        candidate("Beta", "Also unrelated.", "http://beta.example"),
    ];
    let best = select_best(RESOLUTION, ARGUMENT, &candidates).unwrap();
    assert!(candidates.contains(&best.candidate));
}

#[test]
fn empty_candidate_list_yields_none_not_error() {
    assert!(select_best(RESOLUTION, ARGUMENT, &[]).is_none());
}

#[test]
fn scholarly_on_topic_result_beats_thin_off_topic_one() {
    let thin = candidate(
        "Trending now",
        "Clicks.",
        "http://tabloid.example/story",
    );
    let strong = candidate(
        "Identity verification and privacy",
        "According to a recent study, mandatory identity verification on social media \
         platforms violates privacy expectations. Research indicates that user trust \
         declines sharply once verification of identity becomes compulsory across \
         major social media platforms and privacy rights erode in measurable ways.",
        "https://journal.example.edu/privacy",
    );
    let best = select_best(RESOLUTION, ARGUMENT, &[thin, strong.clone()]).unwrap();
    assert_eq!(best.candidate, strong);
    assert!(best.verdicts.resolution_relevant);
    assert!(best.verdicts.argument_relevant);
    assert!(best.verdicts.source_reliable);
}

#[test]
fn equal_candidates_resolve_to_the_first() {
    let a = candidate("Same", "Same snippet.", "https://first.example");
    let b = candidate("Same", "Same snippet.", "https://second.example");
    let best = select_best(RESOLUTION, ARGUMENT, &[a.clone(), b]).unwrap();
    assert_eq!(best.candidate.link, a.link);
}

// ---------------------------------------------------------------------------
// End-to-end flow with the fake collaborator
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_evidence_assembles_the_winner() {
    let searcher = FixedSearcher {
        results: vec![candidate(
            "Verification versus privacy",
            "Research indicates identity verification violates privacy norms.",
            "https://journal.example.edu/privacy",
        )],
    };

    let evidence = find_evidence(&searcher, RESOLUTION, ARGUMENT, Side::Affirmative, 10)
        .await
        .unwrap()
        .expect("one candidate must yield evidence");

    assert_eq!(evidence.source, "https://journal.example.edu/privacy");
    assert!(evidence.citation.starts_with("Verification versus privacy."));
    assert!(evidence.relevance_note.contains("journal.example.edu"));
    let block = evidence.copy_block();
    assert!(block.starts_with("RESOLUTION: Resolved: Social media"));
    assert!(block.contains("SIDE: Affirmative"));
    assert!(block.ends_with("Source: https://journal.example.edu/privacy"));
}

#[tokio::test]
async fn find_evidence_reports_no_results_as_none() {
    let searcher = FixedSearcher { results: vec![] };
    let evidence = find_evidence(&searcher, RESOLUTION, ARGUMENT, Side::Negative, 10)
        .await
        .unwrap();
    assert!(evidence.is_none());
}
