//! Region requests.

/// Container size used when a request does not set one.
const DEFAULT_CONTAINER_SIZE: u32 = 0;

/// A request to render one named region.
///
/// An empty name requests the include region mirroring the whole page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionRequest {
    name: String,
    placeholder: bool,
    empty_view_name: Option<String>,
    container_size: u32,
}

impl RegionRequest {
    /// Request the region called `name`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: false,
            empty_view_name: None,
            container_size: DEFAULT_CONTAINER_SIZE,
        }
    }

    /// Request the include region for the current page.
    #[must_use]
    pub fn include() -> Self {
        Self::named("")
    }

    /// Render a placeholder when the region does not exist.
    #[must_use]
    pub fn placeholder(mut self, placeholder: bool) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// View used by the placeholder region (defaults to the region name).
    #[must_use]
    pub fn empty_view(mut self, view_name: impl Into<String>) -> Self {
        self.empty_view_name = Some(view_name.into());
        self
    }

    /// Width of the container the region renders into.
    #[must_use]
    pub fn container_size(mut self, size: u32) -> Self {
        self.container_size = size;
        self
    }

    /// Requested region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a placeholder may be synthesized.
    #[must_use]
    pub fn allows_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Placeholder view name, if a non-empty one was given.
    #[must_use]
    pub fn empty_view_name(&self) -> Option<&str> {
        self.empty_view_name.as_deref().filter(|v| !v.is_empty())
    }

    /// Requested container size.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.container_size
    }
}
