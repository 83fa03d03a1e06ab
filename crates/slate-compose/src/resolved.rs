//! Resolved regions.

use std::sync::Arc;

use slate_model::{RegionMap, RegionModel, ViewData};

/// A region selected for rendering.
///
/// Regions either come from the page's stored tree or are synthesized
/// during resolution. All variants expose the same name, view and
/// children, so the composition driver treats them uniformly.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedRegion {
    /// Region stored on the page (or nested inside a stored region).
    Stored(Arc<RegionModel>),
    /// Wrapper region mirroring the page's top-level regions.
    Include(RegionModel),
    /// Stand-in for a region the page does not define.
    Placeholder(RegionModel),
}

impl ResolvedRegion {
    /// Underlying region model.
    #[must_use]
    pub fn model(&self) -> &RegionModel {
        match self {
            Self::Stored(region) => region,
            Self::Include(region) | Self::Placeholder(region) => region,
        }
    }

    /// Region name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.model().name()
    }

    /// View descriptor.
    #[must_use]
    pub fn view(&self) -> &ViewData {
        self.model().view()
    }

    /// Nested regions.
    #[must_use]
    pub fn regions(&self) -> &RegionMap {
        self.model().regions()
    }

    /// Path passed to the render dispatcher.
    #[must_use]
    pub fn include_path(&self) -> String {
        self.view().include_path()
    }

    /// Whether the region was synthesized rather than stored.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        !matches!(self, Self::Stored(_))
    }
}
