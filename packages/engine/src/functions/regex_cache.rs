//! Per-evaluation regex compilation cache

use hashbrown::HashMap;
use regex::{Regex, RegexBuilder};

/// Upper bound on the compiled size of a single pattern, in bytes
pub const REGEX_SIZE_LIMIT: usize = 1 << 20;

/// How a pattern is applied, which decides whether it is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegexUsage {
    /// `match()`: the whole string must match
    Match,
    /// `search()`: any substring may match
    Search,
}

/// Compiled patterns keyed by usage and pattern text
///
/// Patterns that fail to compile are cached as `None` so they are not retried.
#[derive(Debug, Default)]
pub struct RegexCache {
    compiled: HashMap<RegexUsage, HashMap<String, Option<Regex>>>,
}

impl RegexCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiled form of `pattern` for `usage`; `None` if it does not compile
    pub fn get_or_compile(&mut self, usage: RegexUsage, pattern: &str) -> Option<&Regex> {
        let patterns = self.compiled.entry(usage).or_default();
        if !patterns.contains_key(pattern) {
            patterns.insert(pattern.to_owned(), compile(usage, pattern));
        }
        patterns.get(pattern).and_then(Option::as_ref)
    }

    /// Number of cached patterns across both usages
    #[must_use]
    pub fn len(&self) -> usize {
        self.compiled.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn compile(usage: RegexUsage, pattern: &str) -> Option<Regex> {
    let source = match usage {
        RegexUsage::Match => format!("^(?:{pattern})$"),
        RegexUsage::Search => pattern.to_owned(),
    };

    match RegexBuilder::new(&source).size_limit(REGEX_SIZE_LIMIT).build() {
        Ok(regex) => {
            tracing::debug!(target: "nodepath::regex", ?usage, pattern, "compiled regex cached");
            Some(regex)
        }
        Err(error) => {
            tracing::debug!(target: "nodepath::regex", ?usage, pattern, %error, "regex failed to compile");
            None
        }
    }
}
