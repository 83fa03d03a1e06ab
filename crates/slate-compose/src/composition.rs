//! Per-request composition driver.
//!
//! A [`Composition`] owns everything one page request needs while its
//! regions render: the page, the dispatcher, the ancestry stack and the
//! output buffer. Nothing is shared between compositions, so concurrent
//! requests never observe each other's ancestry.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use slate_model::PageModel;

use crate::dispatch::Dispatcher;
use crate::exclusions::Exclusions;
use crate::html::escape_html;
use crate::request::RegionRequest;
use crate::resolved::ResolvedRegion;
use crate::resolver::resolve;
use crate::stack::AncestryStack;

/// Composition state for a single page request.
pub struct Composition<'a> {
    page: &'a PageModel,
    dispatcher: &'a dyn Dispatcher,
    ancestry: AncestryStack,
    current: Option<Arc<ResolvedRegion>>,
    output: String,
    failed: Vec<String>,
}

impl<'a> Composition<'a> {
    /// Start composing `page` with a fresh, empty ancestry stack.
    #[must_use]
    pub fn new(page: &'a PageModel, dispatcher: &'a dyn Dispatcher) -> Self {
        Self {
            page,
            dispatcher,
            ancestry: AncestryStack::new(),
            current: None,
            output: String::new(),
            failed: Vec::new(),
        }
    }

    /// Page being composed.
    #[must_use]
    pub fn page(&self) -> &'a PageModel {
        self.page
    }

    /// Regions currently being rendered, outermost first.
    #[must_use]
    pub fn ancestry(&self) -> &AncestryStack {
        &self.ancestry
    }

    /// Region most recently dispatched.
    #[must_use]
    pub fn current_region(&self) -> Option<&ResolvedRegion> {
        self.current.as_deref()
    }

    /// Names of regions whose render failed, in failure order.
    #[must_use]
    pub fn failed_regions(&self) -> &[String] {
        &self.failed
    }

    /// Output written so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Finish composing and take the output.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    /// Append markup to the output.
    pub fn write(&mut self, html: &str) {
        self.output.push_str(html);
    }

    /// Resolve and render one region.
    ///
    /// Returns `true` if a region was dispatched. A missing region, or a
    /// synthetic region that could not be built, is logged and skipped.
    pub fn region(&mut self, request: &RegionRequest) -> bool {
        match resolve(self.ancestry.parent(), self.page, request) {
            Ok(Some(region)) => {
                self.render(region, request.size());
                true
            }
            Ok(None) => {
                tracing::debug!(region = %request.name(), "Region not found on page");
                false
            }
            Err(e) => {
                tracing::warn!(region = %request.name(), error = %e, "Failed to create region");
                false
            }
        }
    }

    /// Render every top-level region of the page except the excluded ones.
    ///
    /// Regions render in page order. A failing region is decorated and the
    /// remaining regions still render.
    pub fn regions(&mut self, exclusions: &Exclusions, container_size: u32) {
        let page = self.page;
        for region in page.regions() {
            if exclusions.contains(region.name()) {
                tracing::debug!(region = %region.name(), "Excluding region");
                continue;
            }
            self.render(ResolvedRegion::Stored(Arc::clone(region)), container_size);
        }
    }

    /// Dispatch a resolved region with it on top of the ancestry stack.
    ///
    /// The stack is restored when dispatch returns, fails or panics. A failed
    /// dispatch discards the region's partial output and writes an error
    /// decoration in its place.
    pub fn render(&mut self, region: ResolvedRegion, container_size: u32) {
        let region = Arc::new(region);
        let path = region.include_path();
        tracing::debug!(
            region = %region.name(),
            path = %path,
            depth = self.ancestry.depth(),
            "Including region"
        );

        self.current = Some(Arc::clone(&region));
        let mark = self.output.len();
        let dispatcher = self.dispatcher;
        let result = {
            let mut scope = self.enter(Arc::clone(&region), container_size);
            dispatcher.include(&path, &region, &mut scope)
        };

        if let Err(e) = result {
            tracing::error!(region = %region.name(), error = %e, "Error while rendering region");
            self.output.truncate(mark);
            self.decorate_error(&region);
            self.failed.push(region.name().to_owned());
        }
    }

    /// Push `region` as the current parent until the returned scope drops.
    fn enter(&mut self, region: Arc<ResolvedRegion>, container_size: u32) -> RegionScope<'_, 'a> {
        self.ancestry.push(region, container_size);
        RegionScope { composition: self }
    }

    fn decorate_error(&mut self, region: &ResolvedRegion) {
        let name = escape_html(region.name());
        self.output.push_str(&format!(
            "<div class=\"region-error\" data-region=\"{name}\">Failed to render region {name}</div>\n"
        ));
    }
}

/// Guard keeping a region on the ancestry stack.
///
/// Dereferences to the [`Composition`] so dispatch can continue composing
/// nested regions. Dropping the guard pops the region.
pub(crate) struct RegionScope<'c, 'a> {
    composition: &'c mut Composition<'a>,
}

impl<'a> Deref for RegionScope<'_, 'a> {
    type Target = Composition<'a>;

    fn deref(&self) -> &Self::Target {
        self.composition
    }
}

impl DerefMut for RegionScope<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.composition
    }
}

impl Drop for RegionScope<'_, '_> {
    fn drop(&mut self) {
        let popped = self.composition.ancestry.pop();
        debug_assert!(popped.is_some(), "ancestry stack underflow");
    }
}
