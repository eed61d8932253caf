//! Name-to-id resolution for `--patient`/`--doctor` style flags.
//!
//! Flags accept either a numeric id or a name. Names are matched
//! case-insensitively against the refs fetched from the server; on a miss the
//! error carries a fuzzy-match suggestion.

use hospital_api_rs::models::NameRef;
use strsim::levenshtein;

use crate::commands::{CommandError, Result};

/// Maximum Levenshtein distance to consider a name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Resolves a name-or-id flag value against a set of refs.
pub fn resolve_ref(resource: &str, query: &str, refs: &[NameRef]) -> Result<i64> {
    if let Ok(id) = query.parse::<i64>() {
        return Ok(id);
    }

    let query_lower = query.to_lowercase();
    if let Some(found) = refs.iter().find(|r| r.name.to_lowercase() == query_lower) {
        return Ok(found.id);
    }

    let suggestion = find_similar_name(query, refs.iter().map(|r| r.name.as_str()));
    Err(CommandError::Lookup(format_not_found(
        resource,
        query,
        suggestion.as_deref(),
    )))
}

/// Formats the "not found" error message, optionally including a suggestion.
fn format_not_found(resource: &str, identifier: &str, suggestion: Option<&str>) -> String {
    let base = format!("{} '{}' not found.", resource, identifier);
    match suggestion {
        Some(s) => format!("{} Did you mean '{}'?", base, s),
        None => base,
    }
}

/// Finds the best matching name from a list of candidates using Levenshtein distance.
///
/// Returns the best match if its edit distance is within the threshold,
/// otherwise returns `None`.
fn find_similar_name<'a>(query: &str, candidates: impl Iterator<Item = &'a str>) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|name| !name.is_empty())
        .map(|name| {
            let distance = levenshtein(&query_lower, &name.to_lowercase());
            (name.to_string(), distance)
        })
        .min_by_key(|(_, d)| *d)?;

    // Only suggest if the distance is within threshold and not an exact match
    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}
