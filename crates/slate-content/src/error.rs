//! Content provider errors.

use slate_storage::{StorageError, Tenant};

use crate::builder::BuildError;

/// Error returned by [`ContentProvider`](crate::ContentProvider).
///
/// Every variant carries the tenant and the last storage path attempted.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// No candidate storage path resolved to a document.
    #[error("Page not found: [{tenant}] {path}")]
    NotFound {
        /// Tenant the lookup ran against.
        tenant: Tenant,
        /// Last storage path attempted.
        path: String,
    },
    /// The content store failed for a reason other than a missing document.
    #[error("Failed to read page: [{tenant}] {path}")]
    Backend {
        /// Tenant the lookup ran against.
        tenant: Tenant,
        /// Storage path that failed.
        path: String,
        /// Underlying storage error.
        #[source]
        source: StorageError,
    },
    /// The stored document is not a valid page.
    #[error("Failed to build page model: [{tenant}] {path}")]
    Parse {
        /// Tenant the lookup ran against.
        tenant: Tenant,
        /// Storage path of the document.
        path: String,
        /// Underlying build error.
        #[source]
        source: BuildError,
    },
}

impl ContentError {
    /// Check whether the page simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Tenant the failing lookup ran against.
    #[must_use]
    pub fn tenant(&self) -> &Tenant {
        match self {
            Self::NotFound { tenant, .. }
            | Self::Backend { tenant, .. }
            | Self::Parse { tenant, .. } => tenant,
        }
    }

    /// Storage path of the failing lookup.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path, .. } | Self::Backend { path, .. } | Self::Parse { path, .. } => {
                path
            }
        }
    }
}
