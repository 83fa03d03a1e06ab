//! Region exclusion lists.

use std::collections::HashSet;
use std::convert::Infallible;
use std::str::FromStr;

/// Region names skipped when enumerating a page's top-level regions.
///
/// Parsed from a comma-separated list. Tokens are trimmed and empty tokens
/// are dropped, so `"Header, ,Footer"` excludes exactly two regions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Exclusions(HashSet<String>);

impl Exclusions {
    /// Parse a comma-separated list of region names.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        spec.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Check whether `name` is excluded.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromStr for Exclusions {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<S: Into<String>> FromIterator<S> for Exclusions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
