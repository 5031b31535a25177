//! Slug assignment
//!
//! A store's slug is derived from its name: lowercased, trimmed, with every
//! run of non-alphanumeric characters collapsed to a single `-`. Duplicate
//! names are disambiguated by counting the records whose slug already
//! matches `^(base)(-[0-9]*)?$` (case-insensitively) and appending
//! `-<count+1>`.
//!
//! The functions here are pure; the repository fetches the candidate slug
//! rows and feeds them in, so the suffix rule stays testable without a
//! database.

/// Compute the base slug for a name
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.trim().chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// POSIX pattern matching the base slug or the base plus a numeric suffix,
/// for use with Postgres `~*`. Base slugs only contain `[a-z0-9-]`, so no
/// regex metacharacters need escaping.
pub fn match_pattern(base: &str) -> String {
    format!("^({})(-[0-9]*)?$", base)
}

/// True when `candidate` is the base slug or the base plus a numeric suffix
/// (case-insensitive), mirroring [`match_pattern`]
pub fn matches_base(base: &str, candidate: &str) -> bool {
    let candidate = candidate.to_lowercase();
    if candidate == base {
        return true;
    }
    candidate
        .strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|digits| digits.chars().all(|c| c.is_ascii_digit()))
}

/// Number of existing slugs that collide with `base`
pub fn matching_count(base: &str, existing: &[String]) -> usize {
    existing.iter().filter(|s| matches_base(base, s)).count()
}

/// Candidate slug for `taken` existing collisions: the base itself when the
/// slug is free, otherwise `base-<taken+1>`
pub fn candidate(base: &str, taken: usize) -> String {
    if taken == 0 {
        base.to_string()
    } else {
        format!("{}-{}", base, taken + 1)
    }
}

/// The slug a new record with this base should receive
pub fn next_slug(base: &str, existing: &[String]) -> String {
    candidate(base, matching_count(base, existing))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slugs(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Clean Bean"), "clean-bean");
        assert_eq!(slugify("  Clean Bean  "), "clean-bean");
        assert_eq!(slugify("CLEAN BEAN"), "clean-bean");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("Clean -- Bean!!"), "clean-bean");
        assert_eq!(slugify("Fish & Chips & More"), "fish-chips-more");
    }

    #[test]
    fn test_slugify_strips_edges() {
        assert_eq!(slugify("!Clean Bean?"), "clean-bean");
        assert_eq!(slugify("..."), "");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("Store 54"), "store-54");
    }

    #[test]
    fn test_match_pattern() {
        assert_eq!(match_pattern("clean-bean"), "^(clean-bean)(-[0-9]*)?$");
    }

    #[test]
    fn test_matches_base() {
        assert!(matches_base("clean-bean", "clean-bean"));
        assert!(matches_base("clean-bean", "clean-bean-2"));
        assert!(matches_base("clean-bean", "Clean-Bean-17"));
        // `-[0-9]*` accepts an empty digit run
        assert!(matches_base("clean-bean", "clean-bean-"));
        assert!(!matches_base("clean-bean", "clean-beanery"));
        assert!(!matches_base("clean-bean", "clean"));
        assert!(!matches_base("clean-bean", "clean-bean-2b"));
    }

    #[test]
    fn test_first_record_gets_base_slug() {
        assert_eq!(next_slug("clean-bean", &[]), "clean-bean");
    }

    #[test]
    fn test_duplicate_gets_count_plus_one() {
        assert_eq!(
            next_slug("clean-bean", &slugs(&["clean-bean"])),
            "clean-bean-2"
        );
        assert_eq!(
            next_slug("clean-bean", &slugs(&["clean-bean", "clean-bean-2"])),
            "clean-bean-3"
        );
    }

    #[test]
    fn test_unrelated_slugs_ignored() {
        assert_eq!(
            next_slug("clean-bean", &slugs(&["clean-beanery", "mean-bean"])),
            "clean-bean"
        );
    }

    // Deletions shrink the count, so the rule can propose an already-used
    // suffix; the repository's unique index + retry resolves it.
    #[test]
    fn test_deletion_gap_reproduces_suffix() {
        assert_eq!(
            next_slug("clean-bean", &slugs(&["clean-bean", "clean-bean-3"])),
            "clean-bean-3"
        );
    }

    #[test]
    fn test_candidate_retry_sequence() {
        assert_eq!(candidate("clean-bean", 0), "clean-bean");
        assert_eq!(candidate("clean-bean", 1), "clean-bean-2");
        assert_eq!(candidate("clean-bean", 2), "clean-bean-3");
    }
}
