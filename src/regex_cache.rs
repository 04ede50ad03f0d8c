use std::sync::Arc;

use dashmap::DashMap;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Cache of compiled structural patterns. Metadata pattern strings repeat
/// across validation calls, so each distinct pattern is compiled at most
/// once per cache.
pub struct RegexCache {
    cache: DashMap<String, Arc<Regex>>,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self
                .cache
                .entry(pattern.to_string())
                .or_try_insert_with(|| Regex::new(pattern).map(Arc::new))?;
            Ok(entry.value().clone())
        }
    }
}

pub trait RegexFullMatch {
    /// Matches only when the whole input is spanned.
    fn full_match(&self, s: &str) -> bool;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        if let Some(matched) = self.find(s) {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }
}
