//! Mock API implementation for testing.
//!
//! Provides [`MockApi`] for unit testing without a running server.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use forum_model::{Category, Comment, NewComment, Post, PostId};

use crate::api::ForumApi;
use crate::error::ForumError;

/// Timestamp given to comments created through the mock.
const DEFAULT_CREATED_AT: &str = "2024-01-01 12:00:00";

/// Mock forum server for testing.
///
/// Stores posts and comments in memory and records every request. Use the
/// builder methods to configure the mock with test data and failures.
///
/// # Example
///
/// ```ignore
/// use forum_client::{ForumApi, MockApi};
/// use forum_model::Category;
///
/// let api = MockApi::new().with_post(post).with_comment(comment);
/// let posts = api.get_posts(Category::All).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockApi {
    posts: RwLock<Vec<Post>>,
    comments: RwLock<HashMap<PostId, Vec<Comment>>>,
    requests: RwLock<Vec<String>>,
    created: RwLock<Vec<NewComment>>,
    fail_posts: bool,
    failing_threads: HashSet<PostId>,
    reject_comments: Option<u16>,
}

impl MockApi {
    /// Create a new empty mock API.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a post.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_post(self, post: Post) -> Self {
        self.posts.write().unwrap().push(post);
        self
    }

    /// Add a comment to its post's thread.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_comment(self, comment: Comment) -> Self {
        self.comments
            .write()
            .unwrap()
            .entry(comment.post_id)
            .or_default()
            .push(comment);
        self
    }

    /// Make every post listing fail with a 500.
    #[must_use]
    pub fn failing_posts(mut self) -> Self {
        self.fail_posts = true;
        self
    }

    /// Make the comment listing of one post fail with a 500.
    #[must_use]
    pub fn failing_thread(mut self, post_id: PostId) -> Self {
        self.failing_threads.insert(post_id);
        self
    }

    /// Reject every comment creation with `status`.
    #[must_use]
    pub fn rejecting_comments(mut self, status: u16) -> Self {
        self.reject_comments = Some(status);
        self
    }

    /// Requests received so far, as `METHOD path` lines in arrival order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.read().unwrap().clone()
    }

    /// Bodies of every `POST /comments` received, accepted or not.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn created_comments(&self) -> Vec<NewComment> {
        self.created.read().unwrap().clone()
    }

    fn record(&self, request: String) {
        self.requests.write().unwrap().push(request);
    }

    fn server_error(status: u16) -> ForumError {
        ForumError::HttpResponse {
            status,
            body: "mock failure".to_owned(),
        }
    }
}

impl ForumApi for MockApi {
    fn get_posts(&self, category: Category) -> Result<Vec<Post>, ForumError> {
        self.record(format!("GET {}", category.posts_path()));
        if self.fail_posts {
            return Err(Self::server_error(500));
        }

        let posts = self.posts.read().unwrap();
        Ok(posts
            .iter()
            .filter(|post| {
                category == Category::All || post.category.as_deref() == Some(category.as_str())
            })
            .cloned()
            .collect())
    }

    fn get_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ForumError> {
        self.record(format!("GET /comments/{post_id}"));
        if self.failing_threads.contains(&post_id) {
            return Err(Self::server_error(500));
        }

        Ok(self
            .comments
            .read()
            .unwrap()
            .get(&post_id)
            .cloned()
            .unwrap_or_default())
    }

    fn create_comment(&self, comment: &NewComment) -> Result<Option<Comment>, ForumError> {
        self.record("POST /comments".to_owned());
        self.created.write().unwrap().push(comment.clone());
        if let Some(status) = self.reject_comments {
            return Err(Self::server_error(status));
        }

        let created = Comment {
            id: None,
            post_id: comment.post_id,
            email: comment.email.clone(),
            contenu: comment.contenu.clone(),
            created_at: DEFAULT_CREATED_AT.to_owned(),
        };
        self.comments
            .write()
            .unwrap()
            .entry(comment.post_id)
            .or_default()
            .push(created.clone());
        Ok(Some(created))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn post(id: PostId, category: &str) -> Post {
        Post {
            id,
            title: format!("Post {id}"),
            email: "alice@example.com".to_owned(),
            contenu: "Contenu".to_owned(),
            created_at: "2024-03-01 10:15:00".to_owned(),
            category: Some(category.to_owned()),
        }
    }

    #[test]
    fn test_category_filter() {
        let api = MockApi::new()
            .with_post(post(1, "cyber"))
            .with_post(post(2, "info"));

        let ids = |c| -> Vec<PostId> { api.get_posts(c).unwrap().iter().map(|p| p.id).collect() };
        assert_eq!(ids(Category::All), vec![1, 2]);
        assert_eq!(ids(Category::Cyber), vec![1]);
        assert!(ids(Category::Anglais).is_empty());
        assert_eq!(
            api.requests(),
            vec!["GET /posts", "GET /posts/cyber", "GET /posts/anglais"]
        );
    }

    #[test]
    fn test_created_comment_joins_thread() {
        let api = MockApi::new().with_post(post(1, "cyber"));
        let body = NewComment {
            post_id: 1,
            email: "bob@example.com".to_owned(),
            contenu: "Merci".to_owned(),
        };

        let created = api.create_comment(&body).unwrap().unwrap();
        assert_eq!(created.contenu, "Merci");
        assert_eq!(api.get_comments(1).unwrap(), vec![created]);
        assert_eq!(api.created_comments(), vec![body]);
    }

    #[test]
    fn test_rejected_comment_not_stored() {
        let api = MockApi::new().rejecting_comments(400);
        let body = NewComment {
            post_id: 1,
            email: "bob@example.com".to_owned(),
            contenu: "Merci".to_owned(),
        };

        let err = api.create_comment(&body).unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(api.get_comments(1).unwrap().is_empty());
    }

    #[test]
    fn test_failing_thread() {
        let api = MockApi::new().failing_thread(3);
        assert!(api.get_comments(3).is_err());
        assert!(api.get_comments(4).unwrap().is_empty());
    }
}
