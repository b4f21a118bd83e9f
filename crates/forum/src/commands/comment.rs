//! `forum comment` command implementation.

use std::path::PathBuf;

use clap::Args;
use forum_board::{Board, Document};
use forum_model::PostId;

use super::{GlobalArgs, SelectArgs, create_client, render_options, write_html};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the comment command.
#[derive(Args)]
pub(crate) struct CommentArgs {
    /// ID of the post to comment on.
    post_id: PostId,

    /// Email of the commenter.
    #[arg(long)]
    email: String,

    /// Comment text.
    #[arg(long)]
    contenu: String,

    #[command(flatten)]
    select: SelectArgs,

    /// Write the refreshed container to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CommentArgs {
    /// Execute the comment command.
    ///
    /// Loads the posts of the category, fills the post's comment form and
    /// submits it. On success the refreshed container is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the post is not shown in the category, the form is
    /// invalid, or the server rejects the comment.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();

        let config = global.load_config(self.select.path.as_deref())?;
        let category = self.select.resolve(&config);
        let client = create_client(&config);
        let board = Board::new(&client, render_options(&config.display));
        let mut document = Document::new(config.page.container_id.clone());

        board.load_posts(category, &mut document)?;

        if !document.fill_comment_form(self.post_id, self.email, self.contenu) {
            return Err(CliError::Validation(format!(
                "post {} is not shown in category {category}",
                self.post_id
            )));
        }
        let Some(form) = document.comment_form(self.post_id).cloned() else {
            return Err(CliError::Validation(format!(
                "no comment form for post {}",
                self.post_id
            )));
        };

        let submitted = board.submit_comment(&form, category, &mut document);
        for alert in document.alerts() {
            output.warning(alert);
        }
        let created = submitted?;

        write_html(&document.to_html(), self.output.as_deref(), &output)?;

        match created.and_then(|comment| comment.id) {
            Some(id) => output.success(&format!(
                "Comment {id} added to post {}",
                self.post_id
            )),
            None => output.success(&format!("Comment added to post {}", self.post_id)),
        }
        Ok(())
    }
}
