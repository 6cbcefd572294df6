/// Substring autocomplete over the cache's name list.
///
/// Plain containment on the lowercased forms; the query carries no regex or
/// glob semantics. Candidate order is preserved, so a pre-sorted list stays
/// sorted. An empty query matches nothing: the host hides the suggestion
/// list instead of showing every name.
pub fn match_candidates<'a>(query: &str, candidates: &'a [String]) -> Vec<&'a str> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}

/// Like [`match_candidates`] but capped at `limit` entries, for a bounded
/// suggestion popup.
pub fn match_candidates_limited<'a>(
    query: &str,
    candidates: &'a [String],
    limit: usize,
) -> Vec<&'a str> {
    if limit == 0 {
        return Vec::new();
    }
    let mut matches = match_candidates(query, candidates);
    if matches.len() > limit {
        matches.truncate(limit);
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn matches_are_case_insensitive_substrings() {
        let names = candidates(&["Aklo", "Light", "lighthouse", "Vibe"]);
        assert_eq!(match_candidates("LIGHT", &names), vec!["Light", "lighthouse"]);
        assert_eq!(match_candidates("ig", &names), vec!["Light", "lighthouse"]);
    }

    #[test]
    fn candidate_order_is_preserved() {
        let names = candidates(&["beta", "alpha-b", "b-side", "gamma"]);
        assert_eq!(match_candidates("b", &names), vec!["beta", "alpha-b", "b-side"]);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let names = candidates(&["Aklo", "Vibe"]);
        assert!(match_candidates("", &names).is_empty());
    }

    #[test]
    fn query_characters_have_no_special_meaning() {
        let names = candidates(&["a.b", "axb", "a*b"]);
        assert_eq!(match_candidates(".", &names), vec!["a.b"]);
        assert_eq!(match_candidates("*", &names), vec!["a*b"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let names = candidates(&["Aklo", "Vibe"]);
        assert!(match_candidates("zzz", &names).is_empty());
    }

    #[test]
    fn limited_truncates_and_zero_limit_is_empty() {
        let names = candidates(&["ab", "abc", "abcd"]);
        assert_eq!(match_candidates_limited("ab", &names, 2), vec!["ab", "abc"]);
        assert!(match_candidates_limited("ab", &names, 0).is_empty());
    }
}
