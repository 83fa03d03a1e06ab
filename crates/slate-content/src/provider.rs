//! Content provider.
//!
//! [`ContentProvider`] resolves logical URLs against a [`ContentStore`] and
//! returns either a built [`PageModel`] or the raw stored content.

use std::io::Cursor;
use std::sync::Arc;

use slate_model::PageModel;
use slate_storage::{ContentStore, Tenant};

use crate::builder::{JsonPageBuilder, PageBuilder};
use crate::error::ContentError;
use crate::path::{fallback_path, resolve_path};

/// Loads pages from a content store.
///
/// Each lookup probes at most two storage paths: the resolved path, and for
/// ambiguous URLs (no trailing `/`, no extension) the directory index. Only a
/// missing document triggers the second probe; any other store failure is
/// returned immediately.
pub struct ContentProvider {
    store: Arc<dyn ContentStore>,
    builder: Arc<dyn PageBuilder>,
}

impl ContentProvider {
    /// Create a provider reading JSON pages from `store`.
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self::with_builder(store, Arc::new(JsonPageBuilder))
    }

    /// Create a provider with a custom page builder.
    #[must_use]
    pub fn with_builder(store: Arc<dyn ContentStore>, builder: Arc<dyn PageBuilder>) -> Self {
        Self { store, builder }
    }

    /// Load the page model for a logical URL.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if no candidate path exists,
    /// [`ContentError::Backend`] if the store fails, and
    /// [`ContentError::Parse`] if the stored document is not a valid page.
    pub fn get_page(&self, path: &str, tenant: &Tenant) -> Result<PageModel, ContentError> {
        self.find_page(path, tenant, |candidate, content| {
            self.builder
                .build(candidate, &content)
                .map_err(|source| ContentError::Parse {
                    tenant: tenant.clone(),
                    path: candidate.to_owned(),
                    source,
                })
        })
    }

    /// Load the raw stored content for a logical URL.
    ///
    /// Content is always UTF-8 encoded.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if no candidate path exists and
    /// [`ContentError::Backend`] if the store fails.
    pub fn get_page_content(
        &self,
        path: &str,
        tenant: &Tenant,
    ) -> Result<Cursor<Vec<u8>>, ContentError> {
        self.find_page(path, tenant, |_, content| {
            Ok(Cursor::new(content.into_bytes()))
        })
    }

    /// Probe candidate storage paths and convert the first document found.
    fn find_page<T>(
        &self,
        path: &str,
        tenant: &Tenant,
        convert: impl Fn(&str, String) -> Result<T, ContentError>,
    ) -> Result<T, ContentError> {
        let mut candidate = resolve_path(path);
        if let Some(content) = self.lookup(tenant, &candidate)? {
            return convert(&candidate, content);
        }

        if let Some(fallback) = fallback_path(path) {
            candidate = fallback;
            if let Some(content) = self.lookup(tenant, &candidate)? {
                return convert(&candidate, content);
            }
        }

        Err(ContentError::NotFound {
            tenant: tenant.clone(),
            path: candidate,
        })
    }

    /// Look up one storage path; a missing document is `Ok(None)`.
    fn lookup(&self, tenant: &Tenant, path: &str) -> Result<Option<String>, ContentError> {
        tracing::debug!(tenant = %tenant, path = %path, "Try to find page");

        match self.store.find(tenant, path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.is_not_found() => {
                tracing::debug!(tenant = %tenant, path = %path, "Page not found");
                Ok(None)
            }
            Err(source) => Err(ContentError::Backend {
                tenant: tenant.clone(),
                path: path.to_owned(),
                source,
            }),
        }
    }
}
