//! `forum comments` command implementation.

use clap::Args;
use forum_board::{Board, Document, Page};
use forum_model::PostId;
use forum_renderer::{Element, comments_region_id};

use super::{GlobalArgs, create_client, render_options, write_html};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the comments command.
#[derive(Args)]
pub(crate) struct CommentsArgs {
    /// ID of the post whose comments are shown.
    post_id: PostId,
}

impl CommentsArgs {
    /// Execute the comments command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the comments cannot
    /// be fetched. The load error notice is still printed.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let config = global.load_config(None)?;
        let client = create_client(&config);
        let board = Board::new(&client, render_options(&config.display));

        let mut document = Document::new(config.page.container_id.clone());
        document.replace_container(vec![
            Element::new("div")
                .class("comments")
                .id(comments_region_id(self.post_id))
                .into(),
        ]);

        let loaded = board.load_comments(self.post_id, &mut document);
        write_html(&document.inner_html(), None, &Output::new())?;
        loaded?;
        Ok(())
    }
}
