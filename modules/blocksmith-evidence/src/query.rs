use blocksmith_common::Side;

use crate::keywords::extract_keywords;

/// Hard cap on query length. The cut is by character, not word boundary —
/// existing query logs depend on the exact truncation.
pub const MAX_QUERY_LEN: usize = 60;

const MAX_RESOLUTION_KEYWORDS: usize = 4;
const MAX_ARGUMENT_KEYWORDS: usize = 3;

/// Build the search query for rebutting the opponent's argument.
///
/// The direction phrase is the opposite of the user's own side: an
/// affirmative debater is answered with evidence *against* the argument,
/// a negative debater with evidence supporting it. Empty inputs produce a
/// degenerate but valid query; this never fails.
pub fn build_query(resolution: &str, argument: &str, side: Side) -> String {
    let resolution_keywords = extract_keywords(resolution, MAX_RESOLUTION_KEYWORDS);
    let argument_keywords = extract_keywords(argument, MAX_ARGUMENT_KEYWORDS);
    let direction = match side {
        Side::Affirmative => "evidence against",
        Side::Negative => "evidence supporting",
    };

    let query = format!(
        "{} {} {}",
        direction,
        argument_keywords.join(" "),
        resolution_keywords.join(" ")
    );

    query.chars().take(MAX_QUERY_LEN).collect()
}
