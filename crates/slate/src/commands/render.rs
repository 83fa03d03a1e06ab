//! `slate render` command implementation.

use std::io::Write;

use clap::Args;
use slate_compose::{Composition, Exclusions, HtmlDispatcher, RegionRequest};
use slate_config::CliSettings;

use super::{CommonArgs, content_provider, tenant};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Logical page path (e.g., "section" or "about/team.html").
    path: String,

    /// Render only this region. An empty name renders the whole page as one region.
    #[arg(long)]
    region: Option<String>,

    /// Render a placeholder when the region does not exist.
    #[arg(long, requires = "region")]
    placeholder: bool,

    /// View used by the placeholder region.
    #[arg(long, requires = "placeholder")]
    empty_view: Option<String>,

    /// Comma-separated regions to skip (overrides config).
    #[arg(long, conflicts_with = "region")]
    exclude: Option<String>,

    /// Container size for top-level regions (overrides config).
    #[arg(long)]
    container_size: Option<u32>,

    /// Only render regions using these views.
    #[arg(long, value_delimiter = ',')]
    views: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl RenderArgs {
    /// Execute the render command, writing page markup to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the page cannot be loaded,
    /// or writing the output fails. Region failures are reported as
    /// warnings and decorated in the output.
    pub(crate) fn execute(self, out: &mut dyn Write) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.common.load_config(CliSettings {
            exclude: self.exclude,
            container_size: self.container_size,
            ..CliSettings::default()
        })?;
        let page = content_provider(&config).get_page(&self.path, &tenant(&config))?;

        let dispatcher = if self.views.is_empty() {
            HtmlDispatcher::new()
        } else {
            HtmlDispatcher::new().with_views(self.views)
        };
        let mut composition = Composition::new(&page, &dispatcher);
        let container_size = config.regions.container_size;

        if let Some(name) = self.region {
            let mut request = RegionRequest::named(name.as_str())
                .placeholder(self.placeholder)
                .container_size(container_size);
            if let Some(view) = self.empty_view {
                request = request.empty_view(view);
            }
            if !composition.region(&request) {
                output.warning(&format!("Region not rendered: {name}"));
            }
        } else {
            composition.regions(&Exclusions::parse(&config.regions.exclude), container_size);
        }

        for failed in composition.failed_regions() {
            output.warning(&format!("Failed to render region {failed}"));
        }

        out.write_all(composition.into_output().as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
