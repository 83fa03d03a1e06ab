//! In-process HTML dispatcher.
//!
//! Renders each region as a `div` carrying its name, view and container
//! size, with nested regions composed inside it.

use std::collections::HashSet;

use crate::composition::Composition;
use crate::dispatch::{DispatchError, Dispatcher};
use crate::request::RegionRequest;
use crate::resolved::ResolvedRegion;

/// Dispatcher writing region markup directly into the composition.
#[derive(Clone, Debug, Default)]
pub struct HtmlDispatcher {
    views: Option<HashSet<String>>,
}

impl HtmlDispatcher {
    /// Create a dispatcher that renders any view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict rendering to the given view names.
    ///
    /// Regions whose view is not listed fail with
    /// [`DispatchError::UnknownView`].
    #[must_use]
    pub fn with_views<I, S>(mut self, views: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.views = Some(views.into_iter().map(Into::into).collect());
        self
    }
}

impl Dispatcher for HtmlDispatcher {
    fn include(
        &self,
        path: &str,
        region: &ResolvedRegion,
        composition: &mut Composition<'_>,
    ) -> Result<(), DispatchError> {
        let view = region.view();
        if let Some(views) = &self.views
            && !views.contains(&view.view_name)
        {
            return Err(DispatchError::UnknownView(view.view_name.clone()));
        }

        let container_size = composition.ancestry().container_size().unwrap_or_default();
        composition.write(&format!(
            "<div class=\"region\" data-region=\"{}\" data-view=\"{}\" data-container-size=\"{container_size}\" data-path=\"{}\">\n",
            escape_html(region.name()),
            escape_html(&view.view_name),
            escape_html(path),
        ));
        for child in region.regions().names() {
            composition.region(&RegionRequest::named(child).container_size(container_size));
        }
        composition.write("</div>\n");
        Ok(())
    }
}

/// Escape text for use in HTML content and attribute values.
pub(crate) fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
