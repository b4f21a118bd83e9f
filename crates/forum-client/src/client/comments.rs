//! Comment operations for the forum API.

use tracing::{debug, info};

use super::{ForumClient, read_checked, read_json};
use crate::error::ForumError;
use forum_model::{Comment, NewComment, PostId};

impl ForumClient {
    /// Get all comments on a post.
    pub(crate) fn fetch_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ForumError> {
        let url = self.url(&format!("/comments/{post_id}"));

        info!("Getting comments for post {}", post_id);

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()?;

        let comments: Option<Vec<Comment>> = read_json(response)?;
        let comments = comments.unwrap_or_default();
        info!("Found {} comments on post {}", comments.len(), post_id);
        Ok(comments)
    }

    /// Create a comment on a post.
    ///
    /// Success is decided by the status code alone; the body is returned
    /// as a [`Comment`] only when it parses as one.
    pub(crate) fn post_comment(&self, comment: &NewComment) -> Result<Option<Comment>, ForumError> {
        let url = self.url("/comments");

        info!("Creating comment on post {}", comment.post_id);

        let response = self
            .agent
            .post(&url)
            .header("Accept", "application/json")
            .send_json(comment)?;

        let body = read_checked(response)?;
        match serde_json::from_str::<Comment>(&body) {
            Ok(created) => Ok(Some(created)),
            Err(err) => {
                debug!("Comment response is not a comment: {}", err);
                Ok(None)
            }
        }
    }
}
