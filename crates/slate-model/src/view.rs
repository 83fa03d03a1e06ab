//! View descriptors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Prefix of every region include path.
const INCLUDE_PATH_PREFIX: &str = "/system/mvc/";

/// Describes which template renders a region and how it is reached.
///
/// Regions built by the content layer and regions synthesized during
/// composition both start from [`ViewData::core_region`] and override
/// individual fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewData {
    /// Module area owning the view template.
    pub area_name: String,
    /// Module area owning the controller.
    pub controller_area_name: String,
    /// Controller handling the include.
    pub controller_name: String,
    /// Controller action handling the include.
    pub action_name: String,
    /// Template identifier.
    pub view_name: String,
    /// Region this descriptor belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    /// Free-form view metadata.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl ViewData {
    /// Default descriptor for a core region named `region_name`.
    ///
    /// The view name defaults to the region name.
    #[must_use]
    pub fn core_region(region_name: &str) -> Self {
        Self {
            area_name: "Core".to_owned(),
            controller_area_name: "Framework".to_owned(),
            controller_name: "Region".to_owned(),
            action_name: "Region".to_owned(),
            view_name: region_name.to_owned(),
            region_name: Some(region_name.to_owned()),
            metadata: BTreeMap::new(),
        }
    }

    /// Replace the view name.
    #[must_use]
    pub fn with_view_name(mut self, view_name: impl Into<String>) -> Self {
        self.view_name = view_name.into();
        self
    }

    /// Path the render dispatcher includes for this view.
    ///
    /// Format: `/system/mvc/{controller_area}/{controller}/{action}/{region}`,
    /// falling back to the view name when no region name is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use slate_model::ViewData;
    ///
    /// let view = ViewData::core_region("Header");
    /// assert_eq!(view.include_path(), "/system/mvc/Framework/Region/Region/Header");
    /// ```
    #[must_use]
    pub fn include_path(&self) -> String {
        let target = self.region_name.as_deref().unwrap_or(&self.view_name);
        format!(
            "{INCLUDE_PATH_PREFIX}{}/{}/{}/{target}",
            self.controller_area_name, self.controller_name, self.action_name
        )
    }
}
