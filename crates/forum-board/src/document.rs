//! In-memory page.

use std::collections::HashMap;

use forum_model::PostId;
use forum_renderer::{Element, Node, comment_form_id, to_html};
use tracing::{debug, warn};

use crate::form::CommentForm;
use crate::page::Page;

/// In-memory page holding the posts container.
///
/// Records alerts and form resets so callers can report them, and keeps the
/// values typed into comment forms until they are reset or the container is
/// replaced.
#[derive(Debug, Clone)]
pub struct Document {
    container_id: String,
    container: Vec<Node>,
    alerts: Vec<String>,
    form_resets: Vec<PostId>,
    drafts: HashMap<PostId, CommentForm>,
}

impl Document {
    /// Create an empty page whose container has id `container_id`.
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            container: Vec::new(),
            alerts: Vec::new(),
            form_resets: Vec::new(),
            drafts: HashMap::new(),
        }
    }

    /// Current contents of the posts container.
    #[must_use]
    pub fn container(&self) -> &[Node] {
        &self.container
    }

    /// Container contents serialised as HTML.
    #[must_use]
    pub fn inner_html(&self) -> String {
        to_html(&self.container)
    }

    /// The container element itself serialised as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        Node::from(self.container_element()).to_html()
    }

    /// Find an element inside the container by id.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.container
            .iter()
            .filter_map(Node::as_element)
            .find_map(|el| el.find_by_id(id))
    }

    /// Elements inside the container carrying `class`, in document order.
    #[must_use]
    pub fn elements_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        for el in self.container.iter().filter_map(Node::as_element) {
            el.collect_by_class(class, &mut found);
        }
        found
    }

    /// Messages shown through [`Page::alert`], oldest first.
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Posts whose comment form was reset, oldest first.
    #[must_use]
    pub fn form_resets(&self) -> &[PostId] {
        &self.form_resets
    }

    /// Type values into a post's comment form.
    ///
    /// Returns `false` if the page has no form for that post.
    pub fn fill_comment_form(
        &mut self,
        post_id: PostId,
        email: impl Into<String>,
        contenu: impl Into<String>,
    ) -> bool {
        if self.element_by_id(&comment_form_id(post_id)).is_none() {
            warn!("No comment form for post {} on the page", post_id);
            return false;
        }
        self.drafts
            .insert(post_id, CommentForm::new(post_id, email, contenu));
        true
    }

    /// Values currently in a post's comment form, if anything was typed.
    #[must_use]
    pub fn comment_form(&self, post_id: PostId) -> Option<&CommentForm> {
        self.drafts.get(&post_id)
    }

    fn container_element(&self) -> Element {
        Element::new("div")
            .id(self.container_id.clone())
            .children(self.container.iter().cloned())
    }
}

impl Page for Document {
    fn replace_container(&mut self, nodes: Vec<Node>) {
        debug!("Replacing #{} with {} nodes", self.container_id, nodes.len());
        self.container = nodes;
        self.drafts.clear();
    }

    fn replace_region(&mut self, region_id: &str, nodes: Vec<Node>) -> bool {
        let region = self.container.iter_mut().find_map(|node| match node {
            Node::Element(el) => el.find_by_id_mut(region_id),
            Node::Text(_) => None,
        });

        if let Some(region) = region {
            region.children = nodes;
            true
        } else {
            warn!("Region #{} not found on the page", region_id);
            false
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }

    fn reset_comment_form(&mut self, post_id: PostId) {
        self.drafts.remove(&post_id);
        self.form_resets.push(post_id);
    }
}
