//! Filesystem content store.
//!
//! Provides [`FsStore`] for reading published documents laid out as
//! `<root>/<tenant>/<storage path>` on the local filesystem.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::storage::{ContentStore, StorageError, StorageErrorKind, Tenant};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem content store.
///
/// Each tenant owns a directory below the root. Documents are read as UTF-8.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use slate_storage::{ContentStore, FsStore, Tenant};
///
/// let store = FsStore::new(PathBuf::from("content"));
/// let json = store.find(&Tenant::new("1"), "index.html")?;
/// ```
#[derive(Debug)]
pub struct FsStore {
    /// Root directory holding one directory per tenant.
    root: PathBuf,
}

impl FsStore {
    /// Create a new filesystem store rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root directory of the store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate that a path stays inside its tenant directory.
    ///
    /// Rejects paths containing parent directory components (`..`) to prevent
    /// path traversal attacks (e.g., `../../../etc/passwd`).
    fn validate_path(path: &Path) -> Result<(), StorageError> {
        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if escapes {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Validate that a tenant identifier names a single directory.
    fn validate_tenant(tenant: &Tenant) -> Result<(), StorageError> {
        let id = tenant.as_str();
        let mut components = Path::new(id).components();
        let single = matches!(components.next(), Some(Component::Normal(_)))
            && components.next().is_none();

        if !single {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(id)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Map a tenant and storage path to a file below the root.
    fn file_path(&self, tenant: &Tenant, path: &str) -> Result<PathBuf, StorageError> {
        Self::validate_tenant(tenant)?;
        let relative = Path::new(path.trim_start_matches('/'));
        Self::validate_path(relative)?;
        Ok(self.root.join(tenant.as_str()).join(relative))
    }
}

impl ContentStore for FsStore {
    fn find(&self, tenant: &Tenant, path: &str) -> Result<String, StorageError> {
        let file = self.file_path(tenant, path)?;

        // Directories are not documents.
        if file.is_dir() {
            return Err(StorageError::not_found(&file).with_backend(BACKEND));
        }

        let bytes =
            fs::read(&file).map_err(|e| StorageError::io(e, Some(file.clone())).with_backend(BACKEND))?;

        tracing::trace!(tenant = %tenant, path = %path, bytes = bytes.len(), "Read document");

        String::from_utf8(bytes).map_err(|e| {
            StorageError::new(StorageErrorKind::InvalidData)
                .with_path(&file)
                .with_backend(BACKEND)
                .with_source(e)
        })
    }

    fn exists(&self, tenant: &Tenant, path: &str) -> bool {
        self.file_path(tenant, path)
            .is_ok_and(|file| file.is_file())
    }
}
