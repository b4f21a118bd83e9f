//! Post operations for the forum API.

use tracing::info;

use super::{ForumClient, read_json};
use crate::error::ForumError;
use forum_model::{Category, Post};

impl ForumClient {
    /// List posts of a category.
    ///
    /// A `null` body (the server's encoding of an empty list) yields no posts.
    pub(crate) fn fetch_posts(&self, category: Category) -> Result<Vec<Post>, ForumError> {
        let url = self.url(&category.posts_path());

        info!("Getting posts for category {}", category);

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()?;

        let posts: Option<Vec<Post>> = read_json(response)?;
        let posts = posts.unwrap_or_default();
        info!("Found {} posts in category {}", posts.len(), category);
        Ok(posts)
    }
}
