//! Page and region model for slate.
//!
//! This crate provides the node types of a composed page:
//! - [`PageModel`]: the root of the tree, owning its top-level regions
//! - [`RegionModel`]: a named, independently renderable slot with nested regions
//! - [`RegionMap`]: insertion-ordered region collection keyed by name
//! - [`ViewData`]: the view descriptor used to dispatch a region to a template
//! - [`NavigationFilter`]: traversal options for navigation queries
//!
//! Regions never point back at their parent. Nesting is tracked by the
//! composition layer while a region is being rendered.

mod navigation;
mod page;
mod region;
mod view;

pub use navigation::NavigationFilter;
pub use page::{OutlineEntry, PageModel};
pub use region::{RegionError, RegionMap, RegionModel};
pub use view::ViewData;
