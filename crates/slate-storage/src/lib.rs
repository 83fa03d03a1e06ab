//! Content store abstraction for slate.
//!
//! This crate provides a [`ContentStore`] trait for looking up stored page
//! documents by tenant and storage path. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Backend flexibility** (filesystem today, a broker database later)
//! - **Retry decisions** by callers, based on [`StorageErrorKind::NotFound`]
//!
//! # Architecture
//!
//! The crate provides:
//! - [`ContentStore`] trait with `find()` and `exists()` methods
//! - [`FsStore`] implementation reading `<root>/<tenant>/<path>`
//! - [`MockStore`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use slate_storage::{ContentStore, FsStore, Tenant};
//!
//! let store = FsStore::new(PathBuf::from("content"));
//! let json = store.find(&Tenant::new("1"), "about/index.html")?;
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStore;
#[cfg(feature = "mock")]
pub use mock::MockStore;
pub use storage::{ContentStore, ErrorStatus, StorageError, StorageErrorKind, Tenant};
