//! Configuration management for slate.
//!
//! Parses `slate.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `content.root`
//! - `content.tenant`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use slate_model::NavigationFilter;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content root directory.
    pub root: Option<PathBuf>,
    /// Override default tenant.
    pub tenant: Option<String>,
    /// Override default region exclusions.
    pub exclude: Option<String>,
    /// Override default container size.
    pub container_size: Option<u32>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "slate.toml";

/// Tenant used when none is configured.
pub const DEFAULT_TENANT: &str = "default";

/// Largest container size a region can be rendered into.
pub const MAX_CONTAINER_SIZE: u32 = 12;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Region composition defaults.
    pub regions: RegionsConfig,
    /// Default navigation traversal.
    pub navigation: NavigationFilter,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw content configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    root: Option<String>,
    tenant: Option<String>,
}

/// Resolved content configuration with an absolute root.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Directory holding one subdirectory per tenant.
    pub root: PathBuf,
    /// Tenant used when a command does not name one.
    pub tenant: String,
}

/// Region composition defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RegionsConfig {
    /// Comma-separated region names skipped when rendering a whole page.
    pub exclude: String,
    /// Container size for top-level renders.
    pub container_size: u32,
}

impl Default for RegionsConfig {
    fn default() -> Self {
        Self {
            exclude: String::new(),
            container_size: MAX_CONTAINER_SIZE,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`content.root`").
        field: String,
        /// Error message (e.g., "${`CONTENT_ROOT`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `slate.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, and the
    /// result is validated again so overrides obey the same rules.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the effective configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(root) = &settings.root {
            self.content_resolved.root.clone_from(root);
        }
        if let Some(tenant) = &settings.tenant {
            self.content_resolved.tenant.clone_from(tenant);
        }
        if let Some(exclude) = &settings.exclude {
            self.regions.exclude.clone_from(exclude);
        }
        if let Some(container_size) = settings.container_size {
            self.regions.container_size = container_size;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            content: ContentConfigRaw::default(),
            regions: RegionsConfig::default(),
            navigation: NavigationFilter::DEFAULT,
            content_resolved: ContentConfig {
                root: base.join("content"),
                tenant: DEFAULT_TENANT.to_owned(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_resolved.tenant.is_empty() {
            return Err(ConfigError::Validation(
                "content.tenant cannot be empty".to_owned(),
            ));
        }

        let size = self.regions.container_size;
        if !(1..=MAX_CONTAINER_SIZE).contains(&size) {
            return Err(ConfigError::Validation(format!(
                "regions.container_size must be between 1 and {MAX_CONTAINER_SIZE}, got {size}"
            )));
        }

        if self.navigation.descendant_levels() == 0 {
            return Err(ConfigError::Validation(
                "navigation.descendant_levels must be at least 1".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref root) = self.content.root {
            self.content.root = Some(expand::expand_env(root, "content.root")?);
        }
        if let Some(ref tenant) = self.content.tenant {
            self.content.tenant = Some(expand::expand_env(tenant, "content.tenant")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.content_resolved = ContentConfig {
            root: config_dir.join(self.content.root.as_deref().unwrap_or("content")),
            tenant: self
                .content
                .tenant
                .clone()
                .unwrap_or_else(|| DEFAULT_TENANT.to_owned()),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(dir: &Path, toml: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, toml).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));

        assert_eq!(config.content_resolved.root, PathBuf::from("/test/content"));
        assert_eq!(config.content_resolved.tenant, DEFAULT_TENANT);
        assert_eq!(config.regions.exclude, "");
        assert_eq!(config.regions.container_size, 12);
        assert_eq!(config.navigation, NavigationFilter::DEFAULT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.regions.container_size, 12);
        assert_eq!(config.navigation.descendant_levels(), 1);
        assert!(!config.navigation.with_ancestors());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[content]
root = "site"
tenant = "48"

[regions]
exclude = "Header, Footer"
container_size = 8

[navigation]
with_ancestors = true
descendant_levels = 3
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.content_resolved.root, PathBuf::from("/project/site"));
        assert_eq!(config.content_resolved.tenant, "48");
        assert_eq!(config.regions.exclude, "Header, Footer");
        assert_eq!(config.regions.container_size, 8);
        assert_eq!(
            config.navigation,
            NavigationFilter::DEFAULT.ancestors(true).levels(3)
        );
    }

    #[test]
    fn test_partial_navigation_section_keeps_defaults() {
        let toml = r"
[navigation]
with_ancestors = true
";
        let config: Config = toml::from_str(toml).unwrap();

        assert!(config.navigation.with_ancestors());
        assert_eq!(config.navigation.descendant_levels(), 1);
    }

    #[test]
    fn test_absolute_root_is_kept() {
        let toml = r#"
[content]
root = "/srv/content"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.content_resolved.root, PathBuf::from("/srv/content"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
[content]
tenant = "7"
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.content_resolved.root, dir.path().join("content"));
        assert_eq!(config.content_resolved.tenant, "7");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[content\nroot = ");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r"
[regions]
container_size = 13
",
        );

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("regions.container_size"));
    }

    #[test]
    fn test_load_missing_env_var() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
[content]
root = "${SLATE_SURELY_UNSET_ROOT}"
"#,
        );

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("content.root"));
    }

    #[test]
    fn test_load_env_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
[content]
root = "${SLATE_SURELY_UNSET_ROOT:-pages}"
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.content_resolved.root, dir.path().join("pages"));
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(Config::discover_from(&nested), Some(path));
    }

    #[test]
    fn test_discover_ignores_directory_named_like_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(CONFIG_FILENAME)).unwrap();

        let found = Config::discover_from(dir.path());

        assert_ne!(found, Some(dir.path().join(CONFIG_FILENAME)));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let settings = CliSettings {
            root: Some(PathBuf::from("/other")),
            tenant: Some("48".to_owned()),
            exclude: Some("Header".to_owned()),
            container_size: Some(6),
        };

        config.apply_cli_settings(&settings);

        assert_eq!(config.content_resolved.root, PathBuf::from("/other"));
        assert_eq!(config.content_resolved.tenant, "48");
        assert_eq!(config.regions.exclude, "Header");
        assert_eq!(config.regions.container_size, 6);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.content_resolved.root, PathBuf::from("/test/content"));
        assert_eq!(config.content_resolved.tenant, DEFAULT_TENANT);
        assert_eq!(config.regions.container_size, 12);
    }

    #[test]
    fn test_load_validates_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let settings = CliSettings {
            container_size: Some(0),
            ..CliSettings::default()
        };

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_empty_tenant() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.content_resolved.tenant = String::new();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("content.tenant"));
    }

    #[test]
    fn test_validate_zero_descendant_levels() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.navigation = config.navigation.levels(0);

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("navigation.descendant_levels"));
    }

    #[test]
    fn test_validate_container_size_bounds() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.regions.container_size = 1;
        assert!(config.validate().is_ok());
        config.regions.container_size = 12;
        assert!(config.validate().is_ok());
        config.regions.container_size = 0;
        assert!(config.validate().is_err());
    }
}
