//! Text matching utilities for block assertions

/// Text matching strategies for assertions
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// Exact text match
    Exact(String),
    /// Text starts with prefix
    StartsWith(String),
    /// Text contains substring
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix),
            TextMatch::Contains(substring) => actual.contains(substring),
        }
    }

    /// Assert that the actual text matches this pattern
    pub fn assert(&self, actual: &str, context: &str) {
        let (how, expected) = match self {
            TextMatch::Exact(expected) => ("be", expected),
            TextMatch::StartsWith(prefix) => ("start with", prefix),
            TextMatch::Contains(substring) => ("contain", substring),
        };
        assert!(
            self.matches(actual),
            "{}: Expected text to {} '{}', but got '{}'",
            context,
            how,
            expected,
            actual
        );
    }
}
