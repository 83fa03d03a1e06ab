//! Mock content store for testing.
//!
//! Provides [`MockStore`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::storage::{ContentStore, StorageError, StorageErrorKind, Tenant};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Stored entry: document content or a scripted failure.
#[derive(Debug)]
enum Entry {
    Content(String),
    Failure(StorageErrorKind),
}

/// Mock content store for testing.
///
/// Stores documents in memory and records every lookup so tests can assert
/// which storage paths were probed, in order.
///
/// # Example
///
/// ```ignore
/// use slate_storage::{ContentStore, MockStore, Tenant};
///
/// let store = MockStore::new().with_document("1", "about.html", r#"{"name":"About"}"#);
///
/// let json = store.find(&Tenant::new("1"), "about.html").unwrap();
/// assert_eq!(store.lookups(), vec!["about.html"]);
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    entries: RwLock<HashMap<(String, String), Entry>>,
    lookups: RwLock<Vec<String>>,
}

impl MockStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document for a tenant and storage path.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_document(
        self,
        tenant: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.entries
            .write()
            .unwrap()
            .insert((tenant.into(), path.into()), Entry::Content(content.into()));
        self
    }

    /// Make lookups of a path fail with the given error kind.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(
        self,
        tenant: impl Into<String>,
        path: impl Into<String>,
        kind: StorageErrorKind,
    ) -> Self {
        self.entries
            .write()
            .unwrap()
            .insert((tenant.into(), path.into()), Entry::Failure(kind));
        self
    }

    /// Storage paths looked up so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.read().unwrap().clone()
    }
}

impl ContentStore for MockStore {
    fn find(&self, tenant: &Tenant, path: &str) -> Result<String, StorageError> {
        self.lookups.write().unwrap().push(path.to_owned());

        let entries = self.entries.read().unwrap();
        match entries.get(&(tenant.as_str().to_owned(), path.to_owned())) {
            Some(Entry::Content(content)) => Ok(content.clone()),
            Some(Entry::Failure(kind)) => Err(StorageError::new(*kind)
                .with_path(path)
                .with_backend(BACKEND)),
            None => Err(StorageError::not_found(path).with_backend(BACKEND)),
        }
    }
}
