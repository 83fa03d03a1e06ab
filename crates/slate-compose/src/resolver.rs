//! Region resolution.
//!
//! Resolution order, first match wins:
//!
//! 1. An empty name yields the include region for the page.
//! 2. With a parent region in scope, the name is looked up among the
//!    parent's children only. The page's top-level regions are not consulted.
//! 3. Without a parent, the name is looked up among the page's top-level regions.
//! 4. If nothing matched and the request allows it, a placeholder region is
//!    synthesized.

use std::sync::Arc;

use slate_model::{PageModel, RegionError, RegionModel, ViewData};

use crate::request::RegionRequest;
use crate::resolved::ResolvedRegion;

/// Resolve the region to render for `request`.
///
/// Returns `Ok(None)` when the region does not exist and no placeholder was
/// requested; callers skip rendering in that case.
///
/// # Errors
///
/// Returns [`RegionError`] if a synthetic region cannot be constructed, for
/// example an include region for a page with an empty name.
pub fn resolve(
    parent: Option<&ResolvedRegion>,
    page: &PageModel,
    request: &RegionRequest,
) -> Result<Option<ResolvedRegion>, RegionError> {
    let name = request.name();
    if name.is_empty() {
        return include_region(page).map(Some);
    }

    let scope = match parent {
        Some(parent) => parent.regions(),
        None => page.regions(),
    };
    if let Some(region) = scope.get(name) {
        return Ok(Some(ResolvedRegion::Stored(Arc::clone(region))));
    }

    if request.allows_placeholder() {
        return placeholder_region(name, request.empty_view_name()).map(Some);
    }

    Ok(None)
}

/// Wrapper region named after the page, holding the page's regions.
fn include_region(page: &PageModel) -> Result<ResolvedRegion, RegionError> {
    let name = page.name().replace(' ', "-");
    let view = ViewData::core_region(&name);
    let region = RegionModel::new(name)?
        .with_view(view)
        .with_regions(page.regions().clone());
    Ok(ResolvedRegion::Include(region))
}

/// Stand-in region so markup tooling has a target for an absent region.
fn placeholder_region(
    name: &str,
    empty_view_name: Option<&str>,
) -> Result<ResolvedRegion, RegionError> {
    let view = ViewData::core_region(name).with_view_name(empty_view_name.unwrap_or(name));
    let region = RegionModel::new(name)?.with_view(view);
    Ok(ResolvedRegion::Placeholder(region))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn region(name: &str) -> RegionModel {
        RegionModel::new(name).unwrap()
    }

    fn sample_page() -> PageModel {
        let main = region("Main")
            .with_region(region("Sidebar"))
            .unwrap()
            .with_region(region("Content"))
            .unwrap();
        let sidebar = region("Sidebar")
            .with_view(ViewData::core_region("Sidebar").with_view_name("PageSidebar"));

        PageModel::new("Home Page", "index.html")
            .with_region(region("Header"))
            .unwrap()
            .with_region(main)
            .unwrap()
            .with_region(sidebar)
            .unwrap()
    }

    fn stored(page: &PageModel, name: &str) -> ResolvedRegion {
        ResolvedRegion::Stored(Arc::clone(page.regions().get(name).unwrap()))
    }

    #[test]
    fn test_resolve_top_level_region() {
        let page = sample_page();

        let resolved = resolve(None, &page, &RegionRequest::named("Header"))
            .unwrap()
            .unwrap();

        assert_eq!(resolved, stored(&page, "Header"));
        let ResolvedRegion::Stored(model) = &resolved else {
            panic!("expected stored region");
        };
        assert!(Arc::ptr_eq(model, page.regions().get("Header").unwrap()));
    }

    #[test]
    fn test_resolve_every_top_level_region_unchanged() {
        let page = sample_page();

        for name in page.regions().names() {
            let resolved = resolve(None, &page, &RegionRequest::named(name))
                .unwrap()
                .unwrap();
            assert_eq!(resolved.model(), page.regions().get(name).unwrap().as_ref());
        }
    }

    #[test]
    fn test_parent_scope_shadows_page_scope() {
        let page = sample_page();
        let parent = stored(&page, "Main");

        let resolved = resolve(Some(&parent), &page, &RegionRequest::named("Sidebar"))
            .unwrap()
            .unwrap();

        // The nested Sidebar keeps the default view; the top-level one does not.
        assert_eq!(resolved.view().view_name, "Sidebar");
        assert_eq!(
            page.regions().get("Sidebar").unwrap().view().view_name,
            "PageSidebar"
        );
    }

    #[test]
    fn test_parent_scope_miss_does_not_fall_back_to_page() {
        let page = sample_page();
        let parent = stored(&page, "Main");

        let resolved = resolve(Some(&parent), &page, &RegionRequest::named("Header")).unwrap();

        assert!(resolved.is_none());
    }

    #[test]
    fn test_parent_scope_miss_yields_placeholder() {
        let page = sample_page();
        let parent = stored(&page, "Main");
        let request = RegionRequest::named("Header").placeholder(true);

        let resolved = resolve(Some(&parent), &page, &request).unwrap().unwrap();

        assert!(matches!(resolved, ResolvedRegion::Placeholder(_)));
    }

    #[test]
    fn test_empty_name_yields_include_region() {
        let page = sample_page();

        let resolved = resolve(None, &page, &RegionRequest::include()).unwrap().unwrap();

        assert!(matches!(resolved, ResolvedRegion::Include(_)));
        assert_eq!(resolved.name(), "Home-Page");
        assert_eq!(resolved.view(), &ViewData::core_region("Home-Page"));
        assert_eq!(resolved.regions(), page.regions());
        let names: Vec<&str> = resolved.regions().names().collect();
        assert_eq!(names, vec!["Header", "Main", "Sidebar"]);
    }

    #[test]
    fn test_empty_name_ignores_parent_scope() {
        let page = sample_page();
        let parent = stored(&page, "Main");

        let resolved = resolve(Some(&parent), &page, &RegionRequest::include())
            .unwrap()
            .unwrap();

        assert_eq!(resolved.name(), "Home-Page");
    }

    #[test]
    fn test_include_region_for_unnamed_page_fails() {
        let page = PageModel::new("", "index.html");

        let err = resolve(None, &page, &RegionRequest::include()).unwrap_err();

        assert_eq!(err, RegionError::EmptyName);
    }

    #[test]
    fn test_missing_region_without_placeholder_is_none() {
        let page = sample_page();

        let resolved = resolve(None, &page, &RegionRequest::named("Footer")).unwrap();

        assert!(resolved.is_none());
    }

    #[test]
    fn test_placeholder_uses_requested_name_as_view() {
        let page = sample_page();
        let request = RegionRequest::named("Footer").placeholder(true);

        let resolved = resolve(None, &page, &request).unwrap().unwrap();

        assert!(matches!(resolved, ResolvedRegion::Placeholder(_)));
        assert_eq!(resolved.name(), "Footer");
        assert_eq!(resolved.view().view_name, "Footer");
        assert!(resolved.regions().is_empty());
    }

    #[test]
    fn test_placeholder_uses_empty_view_name() {
        let page = sample_page();
        let request = RegionRequest::named("Footer")
            .placeholder(true)
            .empty_view("EmptyFooter");

        let resolved = resolve(None, &page, &request).unwrap().unwrap();

        assert_eq!(resolved.name(), "Footer");
        assert_eq!(resolved.view().view_name, "EmptyFooter");
        assert_eq!(resolved.view().region_name.as_deref(), Some("Footer"));
    }

    #[test]
    fn test_existing_region_wins_over_placeholder() {
        let page = sample_page();
        let request = RegionRequest::named("Header").placeholder(true);

        let resolved = resolve(None, &page, &request).unwrap().unwrap();

        assert!(matches!(resolved, ResolvedRegion::Stored(_)));
    }
}
