//! Render dispatch.

use crate::composition::Composition;
use crate::resolved::ResolvedRegion;

/// Error returned when rendering a region fails.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Writing region output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// No template is available for the region's view.
    #[error("Unknown view: {0}")]
    UnknownView(String),
    /// The dispatcher rejected the include.
    #[error("{0}")]
    Dispatch(String),
}

/// Renders a resolved region.
///
/// `include` runs with `region` on top of the composition's ancestry stack,
/// so regions requested through `composition` resolve against `region`'s
/// children. Output is written through [`Composition::write`].
pub trait Dispatcher: Send + Sync {
    /// Render `region`, reachable at include path `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if the region cannot be rendered. The
    /// composition replaces the region's output with an error decoration.
    fn include(
        &self,
        path: &str,
        region: &ResolvedRegion,
        composition: &mut Composition<'_>,
    ) -> Result<(), DispatchError>;
}
