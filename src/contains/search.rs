//! Occurrence counting for text searches.

use regex::Regex;

use super::decorator::CaseMode;

/// Counts how often a search target occurs in a text subject.
///
/// Text chains bind [`DefaultSearcher`] unless a custom engine is supplied
/// through `with_searcher`, for example to fold case differently or to count
/// overlapping occurrences.
pub trait Searcher {
    /// Count non-overlapping occurrences of `needle`, left to right.
    fn count_value(&self, subject: &str, needle: &str, case: CaseMode) -> usize;

    /// Count non-overlapping matches of `pattern`, left to right.
    fn count_regex(&self, subject: &str, pattern: &Regex) -> usize;
}

/// Standard occurrence counting.
///
/// Case-insensitive mode compares Unicode-lowercased text, so counts are
/// taken on the lowercased subject and needle.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSearcher;

impl Searcher for DefaultSearcher {
    fn count_value(&self, subject: &str, needle: &str, case: CaseMode) -> usize {
        match case {
            CaseMode::Sensitive => subject.matches(needle).count(),
            CaseMode::Insensitive => subject
                .to_lowercase()
                .matches(needle.to_lowercase().as_str())
                .count(),
        }
    }

    fn count_regex(&self, subject: &str, pattern: &Regex) -> usize {
        pattern.find_iter(subject).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_value_basic() {
        let searcher = DefaultSearcher;
        assert_eq!(searcher.count_value("foo bar", "o", CaseMode::Sensitive), 2);
        assert_eq!(searcher.count_value("foo bar", "oo", CaseMode::Sensitive), 1);
        assert_eq!(searcher.count_value("foo bar", "x", CaseMode::Sensitive), 0);
    }

    #[test]
    fn test_count_value_non_overlapping() {
        let searcher = DefaultSearcher;
        // "aaa" holds one non-overlapping "aa" (left to right), not two
        assert_eq!(searcher.count_value("aaa", "aa", CaseMode::Sensitive), 1);
        assert_eq!(searcher.count_value("aaaa", "aa", CaseMode::Sensitive), 2);
    }

    #[test]
    fn test_count_value_case_sensitive() {
        let searcher = DefaultSearcher;
        assert_eq!(searcher.count_value("foo bar", "O", CaseMode::Sensitive), 0);
    }

    #[test]
    fn test_count_value_case_insensitive() {
        let searcher = DefaultSearcher;
        assert_eq!(
            searcher.count_value("foo bar", "O", CaseMode::Insensitive),
            2
        );
        assert_eq!(
            searcher.count_value("FOO foo", "foo", CaseMode::Insensitive),
            2
        );
    }

    #[test]
    fn test_count_regex() {
        let searcher = DefaultSearcher;
        let pattern = Regex::new("o+").unwrap();
        assert_eq!(searcher.count_regex("foo bar oo", &pattern), 2);

        let pattern = Regex::new("[0-9]+").unwrap();
        assert_eq!(searcher.count_regex("a1b22c333", &pattern), 3);
        assert_eq!(searcher.count_regex("abc", &pattern), 0);
    }
}
