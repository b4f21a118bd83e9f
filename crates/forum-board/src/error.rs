//! Error types for the board flow.

use forum_client::ForumError;
use forum_model::{Category, PostId};

/// Error from a board operation.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// Posts could not be fetched.
    #[error("failed to load posts for category {category}")]
    LoadPosts {
        /// Category being loaded.
        category: Category,
        /// Underlying API error.
        source: ForumError,
    },

    /// A comment thread could not be fetched.
    #[error("failed to load comments for post {post_id}")]
    LoadComments {
        /// Post whose thread was requested.
        post_id: PostId,
        /// Underlying API error.
        source: ForumError,
    },

    /// The server did not accept a comment.
    #[error("failed to submit comment on post {post_id}")]
    Submit {
        /// Post being commented.
        post_id: PostId,
        /// Underlying API error.
        source: ForumError,
    },

    /// The comment form is incomplete.
    #[error("invalid comment: {0}")]
    Validation(String),
}
