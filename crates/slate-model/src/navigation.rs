//! Navigation query options.

use serde::Deserialize;

/// Options controlling how far a navigation query traverses.
///
/// Values are immutable: the builder methods return a modified copy.
/// Call sites that do not configure traversal use [`NavigationFilter::DEFAULT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationFilter {
    with_ancestors: bool,
    descendant_levels: u32,
}

impl NavigationFilter {
    /// Immediate children only, without ancestors.
    pub const DEFAULT: Self = Self {
        with_ancestors: false,
        descendant_levels: 1,
    };

    /// Return a copy that includes (or omits) the ancestors of the start node.
    #[must_use]
    pub const fn ancestors(mut self, with_ancestors: bool) -> Self {
        self.with_ancestors = with_ancestors;
        self
    }

    /// Return a copy descending `levels` levels below the start node.
    #[must_use]
    pub const fn levels(mut self, levels: u32) -> Self {
        self.descendant_levels = levels;
        self
    }

    /// Whether ancestors of the start node are included.
    #[must_use]
    pub const fn with_ancestors(&self) -> bool {
        self.with_ancestors
    }

    /// How many levels below the start node are included.
    #[must_use]
    pub const fn descendant_levels(&self) -> u32 {
        self.descendant_levels
    }
}

impl Default for NavigationFilter {
    fn default() -> Self {
        Self::DEFAULT
    }
}
