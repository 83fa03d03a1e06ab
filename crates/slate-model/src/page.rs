//! Page model.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::navigation::NavigationFilter;
use crate::region::{RegionError, RegionMap, RegionModel};

/// Root of a composed page: a name and its top-level regions.
///
/// Built once per request by the content layer and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct PageModel {
    name: String,
    url: String,
    title: Option<String>,
    regions: RegionMap,
    meta: BTreeMap<String, String>,
}

/// A region listed by [`PageModel::outline`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Nesting depth (0 for top-level regions).
    pub depth: usize,
    /// Slash-separated region path from the page root (e.g., "Main/Sidebar").
    pub path: String,
    /// View name of the region.
    pub view_name: String,
}

impl PageModel {
    /// Create a page without regions.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            title: None,
            regions: RegionMap::new(),
            meta: BTreeMap::new(),
        }
    }

    /// Set the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the top-level regions.
    #[must_use]
    pub fn with_regions(mut self, regions: RegionMap) -> Self {
        self.regions = regions;
        self
    }

    /// Append a top-level region.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::DuplicateRegion`] if the page already has a
    /// region with the same name.
    pub fn with_region(mut self, region: RegionModel) -> Result<Self, RegionError> {
        self.regions.insert(region)?;
        Ok(self)
    }

    /// Replace the page metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: BTreeMap<String, String>) -> Self {
        self.meta = meta;
        self
    }

    /// Logical page name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Storage path the page was loaded from.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Page title, if set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Top-level regions in render order.
    #[must_use]
    pub fn regions(&self) -> &RegionMap {
        &self.regions
    }

    /// Page metadata.
    #[must_use]
    pub fn meta(&self) -> &BTreeMap<String, String> {
        &self.meta
    }

    /// List the region tree as a flat outline.
    ///
    /// Without `start`, lists top-level regions and descends
    /// `filter.descendant_levels() - 1` further levels. With a slash-separated
    /// `start` path, lists the region at that path followed by
    /// `filter.descendant_levels()` levels below it, preceded by its ancestors
    /// when `filter.with_ancestors()` is set. An unknown `start` yields an
    /// empty outline.
    #[must_use]
    pub fn outline(&self, start: Option<&str>, filter: NavigationFilter) -> Vec<OutlineEntry> {
        let mut entries = Vec::new();
        let segments: Vec<&str> = start
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        if segments.is_empty() {
            walk(
                &self.regions,
                "",
                0,
                filter.descendant_levels(),
                &mut entries,
            );
            return entries;
        }

        let mut chain: Vec<&Arc<RegionModel>> = Vec::with_capacity(segments.len());
        let mut current = &self.regions;
        for segment in &segments {
            let Some(region) = current.get(segment) else {
                return entries;
            };
            chain.push(region);
            current = region.regions();
        }

        let Some((target, ancestors)) = chain.split_last() else {
            return entries;
        };
        if filter.with_ancestors() {
            for (depth, ancestor) in ancestors.iter().enumerate() {
                entries.push(OutlineEntry {
                    depth,
                    path: segments[..=depth].join("/"),
                    view_name: ancestor.view().view_name.clone(),
                });
            }
        }

        let path = segments.join("/");
        let depth = segments.len() - 1;
        entries.push(OutlineEntry {
            depth,
            path: path.clone(),
            view_name: target.view().view_name.clone(),
        });
        walk(
            target.regions(),
            &path,
            depth + 1,
            filter.descendant_levels(),
            &mut entries,
        );
        entries
    }
}

/// Depth-first listing of `regions`, `remaining` levels deep.
fn walk(
    regions: &RegionMap,
    prefix: &str,
    depth: usize,
    remaining: u32,
    entries: &mut Vec<OutlineEntry>,
) {
    if remaining == 0 {
        return;
    }
    for region in regions {
        let path = if prefix.is_empty() {
            region.name().to_owned()
        } else {
            format!("{prefix}/{}", region.name())
        };
        entries.push(OutlineEntry {
            depth,
            path: path.clone(),
            view_name: region.view().view_name.clone(),
        });
        walk(region.regions(), &path, depth + 1, remaining - 1, entries);
    }
}
