//! `forum category` command implementation.

use std::io::Write;

use clap::Args;
use forum_model::Category;

use crate::error::CliError;

/// Arguments for the category command.
#[derive(Args)]
pub(crate) struct CategoryArgs {
    /// Page path, e.g. `/pages/cyber.html`.
    path: String,
}

impl CategoryArgs {
    /// Execute the category command.
    ///
    /// Prints the category name, then the posts route it maps to.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let category = Category::resolve(&self.path);
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{category}")?;
        writeln!(stdout, "{}", category.posts_path())?;
        Ok(())
    }
}
