//! Client for the forum server API.
//!
//! This crate provides a [`ForumApi`] trait over the four server routes the
//! board consumes:
//!
//! - `GET /posts` and `GET /posts/{category}`
//! - `GET /comments/{postId}`
//! - `POST /comments`
//!
//! [`ForumClient`] implements it over HTTP. [`MockApi`] (behind the `mock`
//! feature flag) serves canned data for tests.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use forum_client::{ForumApi, ForumClient};
//! use forum_model::Category;
//!
//! let client = ForumClient::new("http://localhost:8080", Duration::from_secs(30));
//! let posts = client.get_posts(Category::Cyber)?;
//! # Ok::<(), forum_client::ForumError>(())
//! ```

mod api;
mod client;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use api::ForumApi;
pub use client::ForumClient;
pub use error::ForumError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockApi;
