//! Markup for the forum board.
//!
//! Rendering is a pure projection of fetched data: the functions in this
//! crate take posts and their comment threads and return a tree of [`Node`]s
//! describing the DOM to insert. Nothing here performs I/O.
//!
//! Server strings are untrusted. They are stored as text nodes and escaped by
//! [`sanitize`] when the tree is serialised, so no input can inject markup.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use forum_renderer::{RenderOptions, render_posts, to_html};
//!
//! let nodes = render_posts(&[], &HashMap::new(), &RenderOptions::default());
//! assert!(to_html(&nodes).contains("no-posts"));
//! ```

mod date;
mod html;
mod node;
mod options;
mod sanitize;

pub use date::{DEFAULT_DATE_FORMAT, format_date, is_valid_date_format};
pub use html::{
    CommentThread, comment_form_id, comments_region_id, render_comment, render_comment_form,
    render_comments, render_load_error, render_no_posts, render_post, render_posts,
};
pub use node::{Element, Node, to_html};
pub use options::{Labels, RenderOptions};
pub use sanitize::{sanitize, sanitize_attribute};
