//! Post and comment render functions.
//!
//! Produces the markup inserted into the posts container:
//!
//! ```html
//! <div class="post" id="post-{id}">
//!   <div class="post-title">…</div>
//!   <div class="post-email">Posté par : …</div>
//!   <div class="post-contenu">…</div>
//!   <div class="post-date">…</div>
//!   <div class="comments" id="comments-{id}">…</div>
//!   <form class="comment-form" id="comment-form-{id}" data-post-id="{id}">…</form>
//! </div>
//! ```

use std::collections::HashMap;

use forum_model::{Comment, Post, PostId};

use crate::date::format_date;
use crate::node::{Element, Node};
use crate::options::{Labels, RenderOptions};

/// Outcome of fetching one post's comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentThread {
    /// Comments fetched successfully (possibly none).
    Loaded(Vec<Comment>),
    /// The fetch failed.
    Failed,
}

/// DOM id of a post's comments region.
#[must_use]
pub fn comments_region_id(post_id: PostId) -> String {
    format!("comments-{post_id}")
}

/// DOM id of a post's comment form.
#[must_use]
pub fn comment_form_id(post_id: PostId) -> String {
    format!("comment-form-{post_id}")
}

/// Render the contents of the posts container.
///
/// An empty `posts` slice yields exactly the "no posts" placeholder. Posts
/// without an entry in `threads` get an empty comments region.
#[must_use]
pub fn render_posts(
    posts: &[Post],
    threads: &HashMap<PostId, CommentThread>,
    options: &RenderOptions,
) -> Vec<Node> {
    if posts.is_empty() {
        return vec![render_no_posts(&options.labels)];
    }

    posts
        .iter()
        .map(|post| render_post(post, threads.get(&post.id), options))
        .collect()
}

/// Render one post with its comments region and comment form.
#[must_use]
pub fn render_post(post: &Post, thread: Option<&CommentThread>, options: &RenderOptions) -> Node {
    let labels = &options.labels;

    let comments = Element::new("div")
        .class("comments")
        .id(comments_region_id(post.id))
        .children(
            thread
                .map(|thread| render_comments(thread, options))
                .unwrap_or_default(),
        );

    Element::new("div")
        .class("post")
        .id(format!("post-{}", post.id))
        .child(Element::new("div").class("post-title").text(&post.title))
        .child(
            Element::new("div")
                .class("post-email")
                .text(format!("{} {}", labels.posted_by, post.email)),
        )
        .child(Element::new("div").class("post-contenu").text(&post.contenu))
        .child(
            Element::new("div")
                .class("post-date")
                .text(format_date(&post.created_at, &options.date_format)),
        )
        .child(comments)
        .child(render_comment_form(post.id, labels))
        .into()
}

/// Render the children of a comments region.
#[must_use]
pub fn render_comments(thread: &CommentThread, options: &RenderOptions) -> Vec<Node> {
    match thread {
        CommentThread::Failed => vec![render_load_error(&options.labels.comments_load_error)],
        CommentThread::Loaded(comments) if comments.is_empty() => vec![
            Element::new("p")
                .class("no-comments")
                .text(&options.labels.no_comments)
                .into(),
        ],
        CommentThread::Loaded(comments) => comments
            .iter()
            .map(|comment| render_comment(comment, options))
            .collect(),
    }
}

/// Render one comment: its body, then an author and date line.
#[must_use]
pub fn render_comment(comment: &Comment, options: &RenderOptions) -> Node {
    let meta = format!(
        "{} {} — {}",
        options.labels.comment_by,
        comment.email,
        format_date(&comment.created_at, &options.date_format)
    );

    Element::new("div")
        .class("comment")
        .child(Element::new("p").class("comment-contenu").text(&comment.contenu))
        .child(Element::new("p").class("comment-meta").text(meta))
        .into()
}

/// Render the comment submission form of a post.
#[must_use]
pub fn render_comment_form(post_id: PostId, labels: &Labels) -> Node {
    Element::new("form")
        .class("comment-form")
        .id(comment_form_id(post_id))
        .attr("data-post-id", post_id.to_string())
        .child(
            Element::new("input")
                .attr("type", "email")
                .attr("name", "email")
                .attr("placeholder", &labels.email_placeholder)
                .attr("required", "required"),
        )
        .child(
            Element::new("textarea")
                .attr("name", "contenu")
                .attr("placeholder", &labels.comment_placeholder)
                .attr("required", "required"),
        )
        .child(
            Element::new("button")
                .attr("type", "submit")
                .text(&labels.submit),
        )
        .into()
}

/// Placeholder shown when a category has no posts.
#[must_use]
pub fn render_no_posts(labels: &Labels) -> Node {
    Element::new("p").class("no-posts").text(&labels.no_posts).into()
}

/// Notice shown in place of content that failed to load.
#[must_use]
pub fn render_load_error(message: &str) -> Node {
    Element::new("p")
        .class("load-error")
        .attr("role", "alert")
        .text(message)
        .into()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::node::to_html;

    fn post(id: PostId, title: &str) -> Post {
        Post {
            id,
            title: title.to_owned(),
            email: "alice@example.com".to_owned(),
            contenu: "Corps du post".to_owned(),
            created_at: "2024-03-01 10:15:00".to_owned(),
            category: None,
        }
    }

    fn comment(post_id: PostId, contenu: &str) -> Comment {
        Comment {
            id: None,
            post_id,
            email: "bob@example.com".to_owned(),
            contenu: contenu.to_owned(),
            created_at: "2024-03-02 08:00:00".to_owned(),
        }
    }

    fn elements_with_class<'a>(nodes: &'a [Node], class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        for el in nodes.iter().filter_map(Node::as_element) {
            el.collect_by_class(class, &mut found);
        }
        found
    }

    #[test]
    fn test_empty_posts_renders_only_placeholder() {
        let options = RenderOptions::default();
        let nodes = render_posts(&[], &HashMap::new(), &options);

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0], render_no_posts(&options.labels));
        assert!(elements_with_class(&nodes, "post").is_empty());
    }

    #[test]
    fn test_post_fields_rendered() {
        let options = RenderOptions::default();
        let nodes = render_posts(&[post(1, "Titre")], &HashMap::new(), &options);
        let html = to_html(&nodes);

        assert!(html.contains(r#"<div class="post-title">Titre</div>"#));
        assert!(html.contains(r#"<div class="post-email">Posté par : alice@example.com</div>"#));
        assert!(html.contains(r#"<div class="post-contenu">Corps du post</div>"#));
        assert!(html.contains(r#"<div class="post-date">01/03/2024 10:15</div>"#));
        assert!(html.contains(r#"<div class="comments" id="comments-1"></div>"#));
        assert!(html.contains(r#"data-post-id="1""#));
    }

    #[test]
    fn test_posts_keep_server_order() {
        let options = RenderOptions::default();
        let nodes = render_posts(
            &[post(9, "B"), post(2, "A")],
            &HashMap::new(),
            &options,
        );
        let ids: Vec<_> = elements_with_class(&nodes, "post")
            .iter()
            .map(|el| el.get_attr("id").unwrap().to_owned())
            .collect();
        assert_eq!(ids, vec!["post-9", "post-2"]);
    }

    #[test]
    fn test_untrusted_post_fields_are_escaped() {
        let mut evil = post(1, "<script>alert(1)</script>");
        evil.email = "<img src=x onerror=alert(1)>".to_owned();
        evil.contenu = "<b>bold</b>".to_owned();

        let html = to_html(&render_posts(&[evil], &HashMap::new(), &RenderOptions::default()));

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_thread_rendered_into_its_region() {
        let options = RenderOptions::default();
        let threads = HashMap::from([
            (1, CommentThread::Loaded(vec![comment(1, "Premier")])),
            (2, CommentThread::Loaded(Vec::new())),
        ]);
        let nodes = render_posts(&[post(1, "A"), post(2, "B")], &threads, &options);

        let first = nodes[0].as_element().unwrap().find_by_id("comments-1").unwrap();
        assert_eq!(
            Node::from(first.clone()).text_content(),
            "Premierpar bob@example.com — 02/03/2024 08:00"
        );

        let second = nodes[1].as_element().unwrap().find_by_id("comments-2").unwrap();
        assert!(second.children[0].as_element().unwrap().has_class("no-comments"));
    }

    #[test]
    fn test_failed_thread_renders_notice() {
        let options = RenderOptions::default();
        let nodes = render_comments(&CommentThread::Failed, &options);
        assert_eq!(nodes, vec![render_load_error(&options.labels.comments_load_error)]);
    }

    #[test]
    fn test_comment_body_is_escaped() {
        let html = render_comment(&comment(1, "<script>x</script>"), &RenderOptions::default())
            .to_html();
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_comment_form_markup() {
        let html = render_comment_form(42, &Labels::default()).to_html();
        assert_eq!(
            html,
            concat!(
                r#"<form class="comment-form" id="comment-form-42" data-post-id="42">"#,
                r#"<input type="email" name="email" placeholder="Votre email" required="required">"#,
                r#"<textarea name="contenu" placeholder="Votre commentaire" required="required"></textarea>"#,
                r#"<button type="submit">Commenter</button>"#,
                "</form>"
            )
        );
    }

    #[test]
    fn test_custom_labels() {
        let options = RenderOptions {
            labels: Labels {
                no_posts: "Nothing yet".to_owned(),
                ..Labels::default()
            },
            ..RenderOptions::default()
        };
        let html = to_html(&render_posts(&[], &HashMap::new(), &options));
        assert_eq!(html, r#"<p class="no-posts">Nothing yet</p>"#);
    }
}
