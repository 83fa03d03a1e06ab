//! Page model construction from stored documents.
//!
//! Stored pages are JSON documents:
//!
//! ```json
//! {
//!   "name": "Home Page",
//!   "title": "Home",
//!   "regions": [
//!     { "name": "Header", "view": { "viewName": "Header" } },
//!     { "name": "Main", "regions": [ { "name": "Sidebar" } ] }
//!   ]
//! }
//! ```
//!
//! Missing view fields default to the core-region descriptor of the region.

use std::collections::BTreeMap;

use serde::Deserialize;
use slate_model::{PageModel, RegionError, RegionMap, RegionModel, ViewData};

/// Error returned when a stored document cannot be turned into a page model.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Document is not valid page JSON.
    #[error("Invalid page document: {0}")]
    Json(#[from] serde_json::Error),
    /// Document violates region invariants (empty or duplicate names).
    #[error("Invalid region: {0}")]
    Region(#[from] RegionError),
}

/// Converts stored page documents into [`PageModel`]s.
pub trait PageBuilder: Send + Sync {
    /// Build the page stored at storage path `url`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if `content` is not a valid page document.
    fn build(&self, url: &str, content: &str) -> Result<PageModel, BuildError>;
}

/// [`PageBuilder`] for the JSON page format.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonPageBuilder;

impl PageBuilder for JsonPageBuilder {
    fn build(&self, url: &str, content: &str) -> Result<PageModel, BuildError> {
        let data: PageData = serde_json::from_str(content)?;

        let mut page = PageModel::new(data.name, url)
            .with_regions(build_regions(data.regions)?)
            .with_meta(data.meta);
        if let Some(title) = data.title {
            page = page.with_title(title);
        }
        Ok(page)
    }
}

fn build_regions(regions: Vec<RegionData>) -> Result<RegionMap, RegionError> {
    let mut map = RegionMap::new();
    for region in regions {
        map.insert(build_region(region)?)?;
    }
    Ok(map)
}

fn build_region(data: RegionData) -> Result<RegionModel, RegionError> {
    let region = RegionModel::new(data.name)?;
    let view = data
        .view
        .unwrap_or_default()
        .apply_to(ViewData::core_region(region.name()));
    Ok(region
        .with_view(view)
        .with_regions(build_regions(data.regions)?))
}

#[derive(Deserialize)]
struct PageData {
    name: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    regions: Vec<RegionData>,
    #[serde(default)]
    meta: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct RegionData {
    name: String,
    #[serde(default)]
    view: Option<ViewDataPatch>,
    #[serde(default)]
    regions: Vec<RegionData>,
}

/// View fields present in the stored document.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewDataPatch {
    area_name: Option<String>,
    controller_area_name: Option<String>,
    controller_name: Option<String>,
    action_name: Option<String>,
    view_name: Option<String>,
    #[serde(default)]
    metadata: BTreeMap<String, String>,
}

impl ViewDataPatch {
    fn apply_to(self, mut view: ViewData) -> ViewData {
        if let Some(area_name) = self.area_name {
            view.area_name = area_name;
        }
        if let Some(controller_area_name) = self.controller_area_name {
            view.controller_area_name = controller_area_name;
        }
        if let Some(controller_name) = self.controller_name {
            view.controller_name = controller_name;
        }
        if let Some(action_name) = self.action_name {
            view.action_name = action_name;
        }
        if let Some(view_name) = self.view_name {
            view.view_name = view_name;
        }
        view.metadata.extend(self.metadata);
        view
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn build(content: &str) -> Result<PageModel, BuildError> {
        JsonPageBuilder.build("index.html", content)
    }

    #[test]
    fn test_build_minimal_page() {
        let page = build(r#"{"name": "Home Page"}"#).unwrap();

        assert_eq!(page.name(), "Home Page");
        assert_eq!(page.url(), "index.html");
        assert!(page.title().is_none());
        assert!(page.regions().is_empty());
    }

    #[test]
    fn test_build_regions_in_document_order() {
        let page = build(
            r#"{
                "name": "Home",
                "title": "Welcome",
                "regions": [
                    {"name": "Main"},
                    {"name": "Header"},
                    {"name": "Footer"}
                ]
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = page.regions().names().collect();
        assert_eq!(names, vec!["Main", "Header", "Footer"]);
        assert_eq!(page.title(), Some("Welcome"));
    }

    #[test]
    fn test_build_nested_regions() {
        let page = build(
            r#"{"name": "Home", "regions": [
                {"name": "Main", "regions": [{"name": "Left"}, {"name": "Right"}]}
            ]}"#,
        )
        .unwrap();

        let main = page.regions().get("Main").unwrap();
        let children: Vec<&str> = main.regions().names().collect();
        assert_eq!(children, vec!["Left", "Right"]);
    }

    #[test]
    fn test_build_defaults_view_to_core_region() {
        let page = build(r#"{"name": "Home", "regions": [{"name": "Header"}]}"#).unwrap();

        let header = page.regions().get("Header").unwrap();
        assert_eq!(header.view(), &ViewData::core_region("Header"));
    }

    #[test]
    fn test_build_applies_view_patch() {
        let page = build(
            r#"{"name": "Home", "regions": [{
                "name": "Hero",
                "view": {"viewName": "Banner", "areaName": "Marketing", "metadata": {"theme": "dark"}}
            }]}"#,
        )
        .unwrap();

        let view = page.regions().get("Hero").unwrap().view();
        assert_eq!(view.view_name, "Banner");
        assert_eq!(view.area_name, "Marketing");
        assert_eq!(view.controller_name, "Region");
        assert_eq!(view.region_name.as_deref(), Some("Hero"));
        assert_eq!(view.metadata.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn test_build_page_meta() {
        let page = build(r#"{"name": "Home", "meta": {"description": "Start here"}}"#).unwrap();

        assert_eq!(
            page.meta().get("description").map(String::as_str),
            Some("Start here")
        );
    }

    #[test]
    fn test_build_rejects_invalid_json() {
        let err = build("{not json").unwrap_err();

        assert!(matches!(err, BuildError::Json(_)));
    }

    #[test]
    fn test_build_rejects_empty_region_name() {
        let err = build(r#"{"name": "Home", "regions": [{"name": ""}]}"#).unwrap_err();

        assert!(matches!(err, BuildError::Region(RegionError::EmptyName)));
    }

    #[test]
    fn test_build_rejects_duplicate_sibling() {
        let err = build(
            r#"{"name": "Home", "regions": [{"name": "Main"}, {"name": "Main"}]}"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            BuildError::Region(RegionError::DuplicateRegion(ref name)) if name == "Main"
        ));
    }

    #[test]
    fn test_build_allows_same_name_at_different_levels() {
        let page = build(
            r#"{"name": "Home", "regions": [
                {"name": "Main", "regions": [{"name": "Main"}]}
            ]}"#,
        )
        .unwrap();

        assert!(page.regions().get("Main").unwrap().regions().contains("Main"));
    }
}
