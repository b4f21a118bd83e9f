//! Forum REST API client.
//!
//! Provides a sync HTTP client for the forum server's JSON routes.

mod comments;
mod posts;

use std::time::Duration;

use serde::de::DeserializeOwned;
use ureq::Agent;
use ureq::http::Response;

use crate::api::ForumApi;
use crate::error::ForumError;
use forum_model::{Category, Comment, NewComment, Post, PostId};

/// Forum REST API client.
pub struct ForumClient {
    agent: Agent,
    base_url: String,
}

impl ForumClient {
    /// Create a client for the server at `base_url`.
    ///
    /// `timeout` bounds each request as a whole.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Get the server base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an absolute URL from a server path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Read a response body as JSON, mapping error statuses to [`ForumError::HttpResponse`].
fn read_json<T: DeserializeOwned>(response: Response<ureq::Body>) -> Result<T, ForumError> {
    let body = read_checked(response)?;
    Ok(serde_json::from_str(&body)?)
}

/// Read a response body as text, mapping any non-2xx status to [`ForumError::HttpResponse`].
fn read_checked(response: Response<ureq::Body>) -> Result<String, ForumError> {
    let success = response.status().is_success();
    let status = response.status().as_u16();
    let mut body_reader = response.into_body();

    if !success {
        let error_body = body_reader
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(ForumError::HttpResponse {
            status,
            body: error_body,
        });
    }

    Ok(body_reader.read_to_string()?)
}

impl ForumApi for ForumClient {
    fn get_posts(&self, category: Category) -> Result<Vec<Post>, ForumError> {
        self.fetch_posts(category)
    }

    fn get_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ForumError> {
        self.fetch_comments(post_id)
    }

    fn create_comment(&self, comment: &NewComment) -> Result<Option<Comment>, ForumError> {
        self.post_comment(comment)
    }
}
