//! Content path resolution and page loading for slate.
//!
//! This crate provides:
//! - [`resolve_path`]: maps a logical URL to a storage path using the
//!   index-document and default-extension conventions
//! - [`ContentProvider`]: probes a [`ContentStore`](slate_storage::ContentStore)
//!   with the resolved path (and a directory fallback) and returns a
//!   [`PageModel`](slate_model::PageModel) or the raw stored content
//! - [`PageBuilder`]: converts stored documents into page models
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use slate_content::ContentProvider;
//! use slate_storage::{FsStore, Tenant};
//!
//! let store = Arc::new(FsStore::new(PathBuf::from("content")));
//! let provider = ContentProvider::new(store);
//!
//! // Resolves to "section.html", then "section/index.html"
//! let page = provider.get_page("section", &Tenant::new("1"))?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod error;
mod path;
mod provider;

pub use builder::{BuildError, JsonPageBuilder, PageBuilder};
pub use error::ContentError;
pub use path::{DEFAULT_PAGE_EXTENSION, DEFAULT_PAGE_NAME, fallback_path, has_extension, resolve_path};
pub use provider::ContentProvider;
