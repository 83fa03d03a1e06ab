//! `slate content` command implementation.

use std::io::Write;

use clap::Args;
use slate_config::CliSettings;

use super::{CommonArgs, content_provider, tenant};
use crate::error::CliError;

/// Arguments for the content command.
#[derive(Args, Debug)]
pub(crate) struct ContentArgs {
    /// Logical page path (e.g., "section" or "about/team.html").
    path: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ContentArgs {
    /// Copy the stored document for the page to `out`, unparsed.
    pub(crate) fn execute(self, out: &mut dyn Write) -> Result<(), CliError> {
        let config = self.common.load_config(CliSettings::default())?;
        let mut content = content_provider(&config).get_page_content(&self.path, &tenant(&config))?;

        std::io::copy(&mut content, out)?;
        out.flush()?;
        Ok(())
    }
}
