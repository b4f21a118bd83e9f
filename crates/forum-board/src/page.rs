//! Page abstraction the board renders into.

use forum_model::PostId;
use forum_renderer::Node;

/// The page hosting the posts container.
pub trait Page {
    /// Replace the entire contents of the posts container.
    fn replace_container(&mut self, nodes: Vec<Node>);

    /// Replace the children of the element with id `region_id`.
    ///
    /// Returns `false` if no such element is on the page.
    fn replace_region(&mut self, region_id: &str, nodes: Vec<Node>) -> bool;

    /// Show a blocking message to the user.
    fn alert(&mut self, message: &str);

    /// Clear the fields of a post's comment form.
    fn reset_comment_form(&mut self, post_id: PostId);
}
