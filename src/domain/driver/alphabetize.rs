//! Letter reordering for driver names.
//!
//! Characters are ordered by their lowercase form; characters that compare equal keep their
//! input order, and every character keeps its case.

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Sorts the characters of `name` case-insensitively (stable, case preserved).
pub fn alphabetize(name: &str) -> String {
    let mut chars: Vec<char> = name.chars().collect();
    // `sort_by_key` is stable, which keeps "Aa" and "aA" distinct.
    chars.sort_by_key(|c| fold_case(*c));
    chars.into_iter().collect()
}

pub fn alphabetize_full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", alphabetize(first_name), alphabetize(last_name))
}

/// Alphabetizes each whitespace-separated token of `full_name` independently.
///
/// Returns `None` when fewer than two tokens (first and last name) are present.
pub fn alphabetize_tokens(full_name: &str) -> Option<String> {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }
    Some(
        tokens
            .into_iter()
            .map(alphabetize)
            .collect::<Vec<_>>()
            .join(" "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_multiset(s: &str) -> Vec<char> {
        let mut v: Vec<char> = s.chars().collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_simple_lowercase() {
        assert_eq!(alphabetize("dbca"), "abcd");
    }

    #[test]
    fn test_mixed_case_keeps_case_and_is_stable() {
        assert_eq!(alphabetize("Johnson"), "hJnnoos");
        assert_eq!(alphabetize("Oliver"), "eilOrv");
        assert_eq!(alphabetize("aA"), "aA");
        assert_eq!(alphabetize("Aa"), "Aa");
        assert_eq!(alphabetize("bAa"), "Aab");
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(alphabetize(""), "");
        assert_eq!(alphabetize("Z"), "Z");
    }

    #[test]
    fn test_is_permutation() {
        for input in ["Johnson", "McDonald", "O'Neil", "ÉmileZola", "xYzXyZ"] {
            let out = alphabetize(input);
            assert_eq!(sorted_multiset(&out), sorted_multiset(input), "input {input}");
        }
    }

    #[test]
    fn test_idempotent_on_sorted_input() {
        for input in ["Johnson", "Peter", "dbca", "AaBbCc"] {
            let once = alphabetize(input);
            assert_eq!(alphabetize(&once), once);
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(alphabetize_full_name("Oliver", "Johnson"), "eilOrv hJnnoos");
    }

    #[test]
    fn test_tokens_requires_two_parts() {
        assert_eq!(alphabetize_tokens("Johnson"), None);
        assert_eq!(alphabetize_tokens("   "), None);
        assert_eq!(alphabetize_tokens(""), None);
    }

    #[test]
    fn test_tokens_collapses_whitespace() {
        assert_eq!(
            alphabetize_tokens("  Oliver   Johnson "),
            Some("eilOrv hJnnoos".to_string())
        );
    }

    #[test]
    fn test_tokens_more_than_two_parts() {
        assert_eq!(
            alphabetize_tokens("Mary Ann Smith"),
            Some("aMry Ann himSt".to_string())
        );
    }
}
