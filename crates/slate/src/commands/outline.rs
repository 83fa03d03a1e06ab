//! `slate outline` command implementation.

use std::io::Write;

use clap::Args;
use slate_config::CliSettings;

use super::{CommonArgs, content_provider, tenant};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the outline command.
#[derive(Args, Debug)]
pub(crate) struct OutlineArgs {
    /// Logical page path (e.g., "section" or "about/team.html").
    path: String,

    /// Slash-separated region path to start from (e.g., "Main/Content").
    #[arg(long)]
    start: Option<String>,

    /// Number of levels to list below the start (overrides config).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    levels: Option<u32>,

    /// List the ancestors of the start region first.
    #[arg(long)]
    with_ancestors: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl OutlineArgs {
    /// Print the page's region tree to `out`, one region per line.
    pub(crate) fn execute(self, out: &mut dyn Write) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(CliSettings::default())?;
        let page = content_provider(&config).get_page(&self.path, &tenant(&config))?;

        let mut filter = config.navigation;
        if let Some(levels) = self.levels {
            filter = filter.levels(levels);
        }
        if self.with_ancestors {
            filter = filter.ancestors(true);
        }

        output.highlight(page.title().unwrap_or(page.name()));
        let entries = page.outline(self.start.as_deref(), filter);
        if entries.is_empty() {
            output.warning("No regions to list");
        }
        for entry in entries {
            let name = entry.path.rsplit('/').next().unwrap_or(&entry.path);
            writeln!(
                out,
                "{}{name} ({})",
                "  ".repeat(entry.depth),
                entry.view_name
            )?;
        }
        out.flush()?;
        Ok(())
    }
}
