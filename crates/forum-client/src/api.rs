//! Server API abstraction.

use forum_model::{Category, Comment, NewComment, Post, PostId};

use crate::error::ForumError;

/// Operations the board needs from the forum server.
///
/// Implementations must be `Send + Sync`: comment threads of one render
/// cycle are fetched in parallel.
pub trait ForumApi: Send + Sync {
    /// List posts, filtered server-side unless `category` is [`Category::All`].
    ///
    /// # Errors
    ///
    /// Returns [`ForumError`] on network failure, error status or malformed JSON.
    fn get_posts(&self, category: Category) -> Result<Vec<Post>, ForumError>;

    /// List the comments of one post.
    ///
    /// # Errors
    ///
    /// Returns [`ForumError`] on network failure, error status or malformed JSON.
    fn get_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ForumError>;

    /// Create a comment.
    ///
    /// Returns the created comment when the server echoes it back.
    ///
    /// # Errors
    ///
    /// Returns [`ForumError::HttpResponse`] when the server rejects the comment.
    fn create_comment(&self, comment: &NewComment) -> Result<Option<Comment>, ForumError>;
}
