use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Rank `names` by how well they fuzzy-match `query`, best first, keeping
/// at most `limit` of them.
pub fn suggest<'a>(names: impl Iterator<Item = &'a str>, query: &str, limit: usize) -> Vec<&'a str> {
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();
    let mut matches: Vec<(&str, i64)> = names
        .filter(|name| *name != query)
        .filter_map(|name| {
            best_score(&matcher, name, query).map(|score| (name, score))
        })
        .collect();

    // Sort by match score (descending), keeping registration order for ties
    matches.sort_by(|a, b| b.1.cmp(&a.1));
    matches.truncate(limit);
    matches.into_iter().map(|(name, _)| name).collect()
}

/// Typos go both ways: `lok` is a subsequence of `look`, but `lookk` only
/// contains `look`. The query is tried against the name, and the name
/// against the query when the name is not much shorter than it.
fn best_score(matcher: &SkimMatcherV2, name: &str, query: &str) -> Option<i64> {
    let forward = matcher.fuzzy_match(name, query);
    if name.chars().count() * 2 <= query.chars().count() {
        return forward;
    }
    let backward = matcher.fuzzy_match(query, name);
    forward.max(backward)
}
