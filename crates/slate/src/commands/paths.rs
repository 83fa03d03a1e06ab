//! `slate paths` command implementation.

use std::io::Write;

use clap::Args;
use slate_config::CliSettings;
use slate_content::{fallback_path, resolve_path};
use slate_storage::ContentStore;

use super::{CommonArgs, content_store, tenant};
use crate::error::CliError;

/// Arguments for the paths command.
#[derive(Args, Debug)]
pub(crate) struct PathsArgs {
    /// Logical page path (e.g., "section" or "about/team.html").
    path: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl PathsArgs {
    /// Print the storage paths probed for the page, in probe order, with
    /// whether each exists for the configured tenant.
    pub(crate) fn execute(self, out: &mut dyn Write) -> Result<(), CliError> {
        let config = self.common.load_config(CliSettings::default())?;
        let store = content_store(&config);
        let tenant = tenant(&config);

        let candidates = std::iter::once(resolve_path(&self.path)).chain(fallback_path(&self.path));
        for candidate in candidates {
            let status = if store.exists(&tenant, &candidate) {
                "found"
            } else {
                "missing"
            };
            writeln!(out, "{candidate}\t{status}")?;
        }
        out.flush()?;
        Ok(())
    }
}
