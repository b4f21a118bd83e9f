//! Post and comment wire types.

use serde::{Deserialize, Serialize};

/// Post identifier assigned by the server.
pub type PostId = i64;

/// A top-level content item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Post {
    /// Post ID.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Author email.
    pub email: String,
    /// Body text.
    pub contenu: String,
    /// Creation timestamp as sent by the server.
    pub created_at: String,
    /// Category name, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A reply attached to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Comment {
    /// Comment ID, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// ID of the post this comment replies to.
    pub post_id: PostId,
    /// Author email.
    pub email: String,
    /// Body text.
    pub contenu: String,
    /// Creation timestamp as sent by the server.
    pub created_at: String,
}

/// Request body for `POST /comments`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewComment {
    /// ID of the post being commented.
    pub post_id: PostId,
    /// Author email.
    pub email: String,
    /// Body text.
    pub contenu: String,
}
