//! Data model for the forum board.
//!
//! Wire types exchanged with the forum server ([`Post`], [`Comment`],
//! [`NewComment`]) and the [`Category`] partition derived from a page path.
//!
//! # Example
//!
//! ```
//! use forum_model::Category;
//!
//! let category = Category::resolve("/cyber.html");
//! assert_eq!(category, Category::Cyber);
//! assert_eq!(category.posts_path(), "/posts/cyber");
//! ```

mod category;
mod post;

pub use category::{Category, ParseCategoryError};
pub use post::{Comment, NewComment, Post, PostId};
