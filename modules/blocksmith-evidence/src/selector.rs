//! Additive candidate scoring and best-result selection.
//!
//! Scoring is a pure function of (resolution, argument, candidate). All
//! weights are additive, so the total is independent of evaluation order.

use blocksmith_common::{ScoredCandidate, SearchCandidate};
use tracing::debug;

use crate::relevance::{self, candidate_content, matching_token_count};

/// Only the top results are worth scoring; rank decay below this is steep.
pub const MAX_CONSIDERED: usize = 10;

/// Phrases that mark a snippet as directly responding to a claim.
const DIRECT_RESPONSE_PHRASES: &[&str] = &[
    "study shows",
    "research indicates",
    "experts say",
    "according to",
    "findings suggest",
    "demonstrates",
    "proves",
    "evidence shows",
    "concludes",
];

/// Vocabulary typical of citable academic or analytical writing.
const SCHOLARLY_TERMS: &[&str] = &[
    "study",
    "research",
    "analysis",
    "findings",
    "conclusion",
    "evidence",
    "data",
    "results",
    "experts",
    "scholars",
    "academic",
    "peer-reviewed",
];

/// Weight per distinct resolution/argument token found in the content.
const TOKEN_OVERLAP_WEIGHT: f64 = 0.5;

/// Score one candidate against the debate context.
pub fn score_candidate(
    resolution: &str,
    argument: &str,
    candidate: &SearchCandidate,
) -> ScoredCandidate {
    let verdicts = relevance::verdicts(candidate, resolution, argument);

    let mut score = 0.0_f64;
    if verdicts.resolution_relevant {
        score += 2.0;
    }
    if verdicts.argument_relevant {
        score += 3.0;
    }
    if verdicts.source_reliable {
        score += 2.0;
    }

    if !candidate.snippet.is_empty() {
        let snippet_lower = candidate.snippet.to_lowercase();

        if contains_any(&snippet_lower, DIRECT_RESPONSE_PHRASES) {
            score += 3.0;
        }

        score += length_bonus(candidate.snippet.chars().count());

        let complete = complete_sentence_count(&candidate.snippet, argument);
        score += 4.0 * complete as f64;
        if complete >= 2 {
            score += 3.0;
        }
        if complete >= 3 {
            score += 2.0;
        }

        if contains_any(&snippet_lower, SCHOLARLY_TERMS) {
            score += 3.0;
        }
    }

    let content = candidate_content(candidate);
    let resolution_matches = matching_token_count(&content, resolution);
    let argument_matches = matching_token_count(&content, argument);
    score += TOKEN_OVERLAP_WEIGHT * resolution_matches as f64;
    score += TOKEN_OVERLAP_WEIGHT * argument_matches as f64;

    ScoredCandidate {
        candidate: candidate.clone(),
        score,
        verdicts,
    }
}

/// Score the top [`MAX_CONSIDERED`] candidates in input order.
pub fn score_candidates(
    resolution: &str,
    argument: &str,
    candidates: &[SearchCandidate],
) -> Vec<ScoredCandidate> {
    candidates
        .iter()
        .take(MAX_CONSIDERED)
        .map(|candidate| score_candidate(resolution, argument, candidate))
        .collect()
}

/// Pick the best candidate, or `None` for an empty list.
///
/// The baseline is the first candidate at score zero; a later candidate
/// wins only by scoring strictly higher, so ties go to the earliest seen
/// and a non-empty list always yields a member of the input.
pub fn select_best(
    resolution: &str,
    argument: &str,
    candidates: &[SearchCandidate],
) -> Option<ScoredCandidate> {
    let scored = score_candidates(resolution, argument, candidates);
    if scored.is_empty() {
        return None;
    }

    let mut best_idx = 0;
    let mut best_score = 0.0_f64;
    for (idx, entry) in scored.iter().enumerate() {
        if entry.score > best_score {
            best_score = entry.score;
            best_idx = idx;
        }
    }

    let best = scored.into_iter().nth(best_idx);
    if let Some(ref winner) = best {
        debug!(
            score = winner.score,
            link = winner.candidate.link.as_str(),
            considered = candidates.len().min(MAX_CONSIDERED),
            "Selected best candidate"
        );
    }
    best
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Longer snippets give the debater more quotable material.
fn length_bonus(chars: usize) -> f64 {
    if chars > 300 {
        5.0
    } else if chars > 200 {
        4.0
    } else if chars > 100 {
        2.0
    } else if chars > 50 {
        1.0
    } else {
        0.0
    }
}

/// Split on sentence terminators, keeping each terminator attached to its
/// sentence so completeness can check for it.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            sentences.push(std::mem::take(&mut current));
        }
    }
    if !current.trim().is_empty() {
        sentences.push(current);
    }
    sentences
}

/// A complete sentence is long enough to quote, properly capitalized and
/// terminated, and actually engages the argument (contains it verbatim or
/// uses a direct-response phrase).
fn complete_sentence_count(snippet: &str, argument: &str) -> usize {
    let argument_lower = argument.to_lowercase();
    split_sentences(snippet)
        .iter()
        .filter(|sentence| {
            let trimmed = sentence.trim();
            if trimmed.chars().count() <= 30 {
                return false;
            }
            if !trimmed.chars().next().is_some_and(|c| c.is_uppercase()) {
                return false;
            }
            if !trimmed.ends_with(['.', '!', '?']) {
                return false;
            }
            let lower = trimmed.to_lowercase();
            lower.contains(&argument_lower) || contains_any(&lower, DIRECT_RESPONSE_PHRASES)
        })
        .count()
}
