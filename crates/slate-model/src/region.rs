//! Region model.
//!
//! A [`RegionModel`] is a named slot on a page. Regions nest through their
//! [`RegionMap`], which preserves insertion order so pages render regions
//! in the order the content store lists them.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::view::ViewData;

/// Error returned when a region cannot be constructed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
    /// Region names identify regions and cannot be empty.
    #[error("Region name cannot be empty")]
    EmptyName,
    /// A sibling with the same name already exists.
    #[error("Duplicate region name: {0}")]
    DuplicateRegion(String),
}

/// Insertion-ordered collection of regions keyed by name.
///
/// Regions are shared behind [`Arc`], so cloning a map (for example when
/// composition mirrors a page's regions into a synthetic region) copies
/// handles, not trees.
#[derive(Clone, Debug, Default)]
pub struct RegionMap {
    regions: IndexMap<String, Arc<RegionModel>>,
}

impl RegionMap {
    /// Create an empty region map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region, keyed by its name.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::DuplicateRegion`] if a region with the same
    /// name is already present.
    pub fn insert(&mut self, region: RegionModel) -> Result<(), RegionError> {
        if self.regions.contains_key(region.name()) {
            return Err(RegionError::DuplicateRegion(region.name.clone()));
        }
        self.regions.insert(region.name.clone(), Arc::new(region));
        Ok(())
    }

    /// Look up a direct child region by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<RegionModel>> {
        self.regions.get(name)
    }

    /// Check whether a region with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.regions.contains_key(name)
    }

    /// Iterate regions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<RegionModel>> {
        self.regions.values()
    }

    /// Iterate region names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check whether the map has no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

// Order matters: two maps with the same regions in a different order
// compose differently.
impl PartialEq for RegionMap {
    fn eq(&self, other: &Self) -> bool {
        self.regions.iter().eq(other.regions.iter())
    }
}

impl<'a> IntoIterator for &'a RegionMap {
    type Item = &'a Arc<RegionModel>;
    type IntoIter = indexmap::map::Values<'a, String, Arc<RegionModel>>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.values()
    }
}

/// A named region with a view descriptor and nested regions.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionModel {
    name: String,
    view: ViewData,
    regions: RegionMap,
}

impl RegionModel {
    /// Create a region with the default core-region view and no children.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::EmptyName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, RegionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegionError::EmptyName);
        }
        Ok(Self {
            view: ViewData::core_region(&name),
            name,
            regions: RegionMap::new(),
        })
    }

    /// Replace the view descriptor.
    #[must_use]
    pub fn with_view(mut self, view: ViewData) -> Self {
        self.view = view;
        self
    }

    /// Replace the nested regions.
    #[must_use]
    pub fn with_regions(mut self, regions: RegionMap) -> Self {
        self.regions = regions;
        self
    }

    /// Append a nested region.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::DuplicateRegion`] if a sibling has the same name.
    pub fn with_region(mut self, region: RegionModel) -> Result<Self, RegionError> {
        self.regions.insert(region)?;
        Ok(self)
    }

    /// Region name, unique among its siblings.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// View descriptor.
    #[must_use]
    pub fn view(&self) -> &ViewData {
        &self.view
    }

    /// Nested regions.
    #[must_use]
    pub fn regions(&self) -> &RegionMap {
        &self.regions
    }
}
