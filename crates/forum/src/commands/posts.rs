//! `forum posts` command implementation.

use std::path::PathBuf;

use clap::Args;
use forum_board::{Board, Document};

use super::{GlobalArgs, SelectArgs, create_client, render_options, write_html};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the posts command.
#[derive(Args)]
pub(crate) struct PostsArgs {
    #[command(flatten)]
    select: SelectArgs,

    /// Write the rendered container to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl PostsArgs {
    /// Execute the posts command.
    ///
    /// The container is written even when loading fails, so the error notice
    /// is visible in the output.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the posts cannot be
    /// fetched, or the output cannot be written.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();

        let config = global.load_config(self.select.path.as_deref())?;
        let category = self.select.resolve(&config);
        let client = create_client(&config);
        let board = Board::new(&client, render_options(&config.display));
        let mut document = Document::new(config.page.container_id.clone());

        output.info(&format!(
            "Loading {} from {}...",
            category.posts_path(),
            client.base_url()
        ));
        let loaded = board.load_posts(category, &mut document);

        write_html(&document.to_html(), self.output.as_deref(), &output)?;

        let count = loaded?;
        let failed_threads = document.elements_by_class("load-error").len();
        if failed_threads > 0 {
            output.warning(&format!(
                "{failed_threads} comment thread(s) could not be loaded"
            ));
        }
        output.success(&format!("Rendered {count} post(s) in category {category}"));
        Ok(())
    }
}
