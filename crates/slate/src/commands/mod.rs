//! CLI command implementations.

pub(crate) mod content;
pub(crate) mod outline;
pub(crate) mod paths;
pub(crate) mod render;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use slate_config::{CliSettings, Config};
use slate_content::ContentProvider;
use slate_storage::{FsStore, Tenant};

use crate::error::CliError;

pub(crate) use content::ContentArgs;
pub(crate) use outline::OutlineArgs;
pub(crate) use paths::PathsArgs;
pub(crate) use render::RenderArgs;

/// Arguments shared by every command.
#[derive(Args, Debug)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover slate.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content root directory (overrides config).
    #[arg(short, long, env = "SLATE_CONTENT_ROOT")]
    root: Option<PathBuf>,

    /// Tenant to read content for (overrides config).
    #[arg(short, long, env = "SLATE_TENANT")]
    tenant: Option<String>,

    /// Enable verbose output (region resolution and storage probes).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Load configuration with these arguments applied over `overrides`.
    pub(crate) fn load_config(&self, overrides: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            root: self.root.clone(),
            tenant: self.tenant.clone(),
            ..overrides
        };
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }
}

/// Store reading from the configured content root.
pub(crate) fn content_store(config: &Config) -> Arc<FsStore> {
    Arc::new(FsStore::new(config.content_resolved.root.clone()))
}

/// Content provider reading from the configured content root.
pub(crate) fn content_provider(config: &Config) -> ContentProvider {
    ContentProvider::new(content_store(config))
}

/// Tenant selected by the configuration.
pub(crate) fn tenant(config: &Config) -> Tenant {
    Tenant::new(config.content_resolved.tenant.clone())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::path::PathBuf;

    use tempfile::TempDir;

    /// Content tree with a `slate.toml` pointing at it.
    pub(crate) struct Site {
        pub dir: TempDir,
    }

    impl Site {
        /// Create a site whose default tenant is `48`.
        pub(crate) fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(
                dir.path().join("slate.toml"),
                "[content]\nroot = \"content\"\ntenant = \"48\"\n\n[regions]\nexclude = \"Footer\"\n",
            )
            .unwrap();
            Self { dir }
        }

        /// Store `content` at `path` for `tenant`.
        pub(crate) fn page(self, tenant: &str, path: &str, content: &str) -> Self {
            let file = self.dir.path().join("content").join(tenant).join(path);
            std::fs::create_dir_all(file.parent().unwrap()).unwrap();
            std::fs::write(file, content).unwrap();
            self
        }

        pub(crate) fn config_path(&self) -> PathBuf {
            self.dir.path().join("slate.toml")
        }
    }

    /// Page with a header, a main region holding a sidebar, and a footer.
    pub(crate) const HOME_PAGE: &str = r#"{
        "name": "Home",
        "title": "Welcome",
        "regions": [
            {"name": "Header"},
            {"name": "Main", "regions": [{"name": "Sidebar", "view": {"viewName": "Links"}}]},
            {"name": "Footer"}
        ]
    }"#;
}
