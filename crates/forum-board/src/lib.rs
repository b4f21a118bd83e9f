//! Post and comment flow of the forum board.
//!
//! [`Board`] ties the server ([`forum_client::ForumApi`]) to the page
//! ([`Page`]):
//!
//! 1. [`Board::load_posts`] fetches the posts of a category and their comment
//!    threads, then replaces the whole posts container.
//! 2. [`Board::load_comments`] refreshes one post's comments region.
//! 3. [`Board::submit_comment`] posts a comment; on success the form is reset
//!    and the posts are loaded again, on failure the page shows an alert.
//!
//! Every operation receives its category and post context as arguments.
//! [`Document`] is an in-memory [`Page`] that serialises to HTML.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use forum_board::{Board, Document};
//! use forum_client::ForumClient;
//! use forum_model::Category;
//! use forum_renderer::RenderOptions;
//!
//! let client = ForumClient::new("http://localhost:8080", Duration::from_secs(30));
//! let board = Board::new(&client, RenderOptions::default());
//! let mut document = Document::new("posts-container");
//!
//! board.load_posts(Category::resolve("/cyber.html"), &mut document)?;
//! let html = document.to_html();
//! # Ok::<(), forum_board::BoardError>(())
//! ```

mod board;
mod document;
mod error;
mod form;
mod page;

pub use board::Board;
pub use document::Document;
pub use error::BoardError;
pub use form::CommentForm;
pub use page::Page;
