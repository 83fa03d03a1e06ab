//! Region resolution and page composition for slate.
//!
//! This crate provides:
//! - [`resolve`]: picks the region to render for a [`RegionRequest`],
//!   synthesizing include and placeholder regions
//! - [`Composition`]: the per-request driver that tracks the ancestry of
//!   nested regions and dispatches each region to a [`Dispatcher`]
//! - [`HtmlDispatcher`]: an in-process dispatcher producing region markup
//! - [`Exclusions`]: region names skipped when enumerating a page
//!
//! # Quick Start
//!
//! ```
//! use slate_compose::{Composition, Exclusions, HtmlDispatcher, RegionRequest};
//! use slate_model::{PageModel, RegionModel};
//!
//! let page = PageModel::new("Home", "index.html")
//!     .with_region(RegionModel::new("Header").unwrap())
//!     .unwrap()
//!     .with_region(RegionModel::new("Main").unwrap())
//!     .unwrap();
//!
//! let dispatcher = HtmlDispatcher::new();
//! let mut composition = Composition::new(&page, &dispatcher);
//! composition.regions(&Exclusions::parse("Header"), 12);
//! composition.region(&RegionRequest::named("Aside").placeholder(true));
//!
//! let html = composition.into_output();
//! assert!(html.contains(r#"data-region="Main""#));
//! assert!(html.contains(r#"data-region="Aside""#));
//! assert!(!html.contains(r#"data-region="Header""#));
//! ```

mod composition;
mod dispatch;
mod exclusions;
mod html;
mod request;
mod resolved;
mod resolver;
mod stack;

pub use composition::Composition;
pub use dispatch::{DispatchError, Dispatcher};
pub use exclusions::Exclusions;
pub use html::HtmlDispatcher;
pub use request::RegionRequest;
pub use resolved::ResolvedRegion;
pub use resolver::resolve;
pub use stack::{Ancestor, AncestryStack};
