//! Fetch-render-submit flow.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{error, info, warn};

use forum_client::ForumApi;
use forum_model::{Category, Comment, Post, PostId};
use forum_renderer::{
    CommentThread, RenderOptions, comments_region_id, render_comments, render_load_error,
    render_posts,
};

use crate::error::BoardError;
use crate::form::CommentForm;
use crate::page::Page;

/// Renders posts and comments from a [`ForumApi`] into a [`Page`].
pub struct Board<'a, A: ForumApi + ?Sized> {
    api: &'a A,
    options: RenderOptions,
}

impl<'a, A: ForumApi + ?Sized> Board<'a, A> {
    /// Create a board over `api`.
    #[must_use]
    pub fn new(api: &'a A, options: RenderOptions) -> Self {
        Self { api, options }
    }

    /// Render options in use.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Fetch the posts of `category` with their comments and replace the
    /// posts container.
    ///
    /// Comment threads are fetched in parallel; a failed thread only affects
    /// its own region. Returns the number of posts rendered.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::LoadPosts`] if the posts cannot be fetched. The
    /// container then shows a load error notice.
    pub fn load_posts(&self, category: Category, page: &mut impl Page) -> Result<usize, BoardError> {
        let posts = match self.api.get_posts(category) {
            Ok(posts) => posts,
            Err(source) => {
                error!("Failed to load posts for category {}: {}", category, source);
                page.replace_container(vec![render_load_error(
                    &self.options.labels.posts_load_error,
                )]);
                return Err(BoardError::LoadPosts { category, source });
            }
        };

        let threads = self.fetch_threads(&posts);
        page.replace_container(render_posts(&posts, &threads, &self.options));

        info!("Rendered {} posts for category {}", posts.len(), category);
        Ok(posts.len())
    }

    /// Fetch one post's comments and replace its comments region.
    ///
    /// Returns the number of comments rendered.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::LoadComments`] if the comments cannot be fetched.
    /// The region then shows a load error notice.
    pub fn load_comments(&self, post_id: PostId, page: &mut impl Page) -> Result<usize, BoardError> {
        let region_id = comments_region_id(post_id);

        match self.api.get_comments(post_id) {
            Ok(comments) => {
                let count = comments.len();
                let thread = CommentThread::Loaded(comments);
                page.replace_region(&region_id, render_comments(&thread, &self.options));
                Ok(count)
            }
            Err(source) => {
                error!("Failed to load comments for post {}: {}", post_id, source);
                page.replace_region(
                    &region_id,
                    render_comments(&CommentThread::Failed, &self.options),
                );
                Err(BoardError::LoadComments { post_id, source })
            }
        }
    }

    /// Submit a comment form, then reload the posts of `category`.
    ///
    /// Nothing changes on the page until the server accepts the comment. On
    /// success the form is reset and the posts container is rendered again;
    /// a failure of that reload is shown in the container and logged, but the
    /// submission still counts as successful. Returns the created comment when
    /// the server echoes it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] for an incomplete form and
    /// [`BoardError::Submit`] when the server rejects the comment. Both raise
    /// an alert and leave the form untouched.
    pub fn submit_comment(
        &self,
        form: &CommentForm,
        category: Category,
        page: &mut impl Page,
    ) -> Result<Option<Comment>, BoardError> {
        let labels = &self.options.labels;

        if let Err(err) = form.validate() {
            warn!("Rejected comment form for post {}: {}", form.post_id, err);
            page.alert(&labels.invalid_form);
            return Err(err);
        }

        let created = match self.api.create_comment(&form.to_new_comment()) {
            Ok(created) => created,
            Err(source) => {
                error!("Failed to submit comment on post {}: {}", form.post_id, source);
                page.alert(&labels.submit_error);
                return Err(BoardError::Submit {
                    post_id: form.post_id,
                    source,
                });
            }
        };

        info!("Comment added to post {}", form.post_id);
        page.reset_comment_form(form.post_id);

        if let Err(err) = self.load_posts(category, page) {
            warn!("Comment saved but refreshing posts failed: {}", err);
        }

        Ok(created)
    }

    fn fetch_threads(&self, posts: &[Post]) -> HashMap<PostId, CommentThread> {
        posts
            .par_iter()
            .map(|post| (post.id, self.fetch_thread(post.id)))
            .collect()
    }

    fn fetch_thread(&self, post_id: PostId) -> CommentThread {
        match self.api.get_comments(post_id) {
            Ok(comments) => CommentThread::Loaded(comments),
            Err(err) => {
                warn!("Failed to load comments for post {}: {}", post_id, err);
                CommentThread::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use forum_client::MockApi;
    use forum_model::NewComment;
    use forum_renderer::Node;

    use super::*;
    use crate::document::Document;

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

    fn comment(post_id: PostId, contenu: &str) -> Comment {
        Comment {
            id: None,
            post_id,
            email: "bob@example.com".to_owned(),
            contenu: contenu.to_owned(),
            created_at: "2024-03-02 08:00:00".to_owned(),
        }
    }

    fn texts(document: &Document, class: &str) -> Vec<String> {
        document
            .elements_by_class(class)
            .into_iter()
            .map(|el| Node::Element(el.clone()).text_content())
            .collect()
    }

    #[test]
    fn test_load_posts_empty_renders_placeholder() {
        let api = MockApi::new();
        let board = Board::new(&api, RenderOptions::default());
        let mut document = Document::new("posts-container");

        let count = board.load_posts(Category::Cyber, &mut document).unwrap();

        assert_eq!(count, 0);
        assert_eq!(document.container().len(), 1);
        assert_eq!(
            texts(&document, "no-posts"),
            vec![board.options().labels.no_posts.clone()]
        );
        assert_eq!(api.requests(), vec!["GET /posts/cyber"]);
    }

    #[test]
    fn test_load_posts_renders_threads() {
        let api = MockApi::new()
            .with_post(post(1, "info"))
            .with_post(post(2, "info"))
            .with_comment(comment(1, "Bien vu"));
        let board = Board::new(&api, RenderOptions::default());
        let mut document = Document::new("posts-container");

        let count = board.load_posts(Category::Info, &mut document).unwrap();

        assert_eq!(count, 2);
        assert_eq!(texts(&document, "post-title"), vec!["Post 1", "Post 2"]);
        assert_eq!(texts(&document, "comment-contenu"), vec!["Bien vu"]);
        assert_eq!(texts(&document, "no-comments").len(), 1);
        assert!(document.element_by_id("comment-form-2").is_some());

        let mut requests = api.requests();
        assert_eq!(requests.remove(0), "GET /posts/info");
        requests.sort();
        assert_eq!(requests, vec!["GET /comments/1", "GET /comments/2"]);
    }

    #[test]
    fn test_failed_thread_confined_to_region() {
        let api = MockApi::new()
            .with_post(post(1, "cyber"))
            .with_post(post(2, "cyber"))
            .with_comment(comment(2, "Toujours là"))
            .failing_thread(1);
        let board = Board::new(&api, RenderOptions::default());
        let mut document = Document::new("posts-container");

        board.load_posts(Category::All, &mut document).unwrap();

        let failed = document.element_by_id("comments-1").unwrap();
        assert!(failed.children[0].as_element().unwrap().has_class("load-error"));
        assert_eq!(texts(&document, "comment-contenu"), vec!["Toujours là"]);
        assert_eq!(texts(&document, "post-title").len(), 2);
    }

    #[test]
    fn test_load_posts_failure_shows_notice() {
        let api = MockApi::new().with_post(post(1, "cyber")).failing_posts();
        let board = Board::new(&api, RenderOptions::default());
        let mut document = Document::new("posts-container");

        let err = board.load_posts(Category::Cyber, &mut document).unwrap_err();

        assert!(matches!(
            err,
            BoardError::LoadPosts {
                category: Category::Cyber,
                ..
            }
        ));
        assert_eq!(
            texts(&document, "load-error"),
            vec![board.options().labels.posts_load_error.clone()]
        );
        assert_eq!(api.requests(), vec!["GET /posts/cyber"]);
    }

    #[test]
    fn test_load_comments_refreshes_region() {
        let api = MockApi::new().with_post(post(1, "cyber"));
        let board = Board::new(&api, RenderOptions::default());
        let mut document = Document::new("posts-container");
        board.load_posts(Category::All, &mut document).unwrap();

        api.create_comment(&NewComment {
            post_id: 1,
            email: "bob@example.com".to_owned(),
            contenu: "Nouveau".to_owned(),
        })
        .unwrap();

        assert_eq!(board.load_comments(1, &mut document).unwrap(), 1);
        assert_eq!(texts(&document, "comment-contenu"), vec!["Nouveau"]);
    }

    #[test]
    fn test_load_comments_failure() {
        let api = MockApi::new().with_post(post(4, "info")).failing_thread(4);
        let board = Board::new(&api, RenderOptions::default());
        let mut document = Document::new("posts-container");
        let _ = board.load_posts(Category::Info, &mut document);

        let err = board.load_comments(4, &mut document).unwrap_err();

        assert!(matches!(err, BoardError::LoadComments { post_id: 4, .. }));
        assert_eq!(
            texts(&document, "load-error"),
            vec![board.options().labels.comments_load_error.clone()]
        );
    }

    #[test]
    fn test_submit_comment_reloads_category() {
        let api = MockApi::new().with_post(post(7, "anglais"));
        let board = Board::new(&api, RenderOptions::default());
        let mut document = Document::new("posts-container");
        board.load_posts(Category::Anglais, &mut document).unwrap();
        assert!(document.fill_comment_form(7, "bob@example.com", "Nice post"));

        let form = document.comment_form(7).unwrap().clone();
        let created = board
            .submit_comment(&form, Category::Anglais, &mut document)
            .unwrap();

        assert_eq!(created.unwrap().contenu, "Nice post");
        assert_eq!(
            api.created_comments(),
            vec![NewComment {
                post_id: 7,
                email: "bob@example.com".to_owned(),
                contenu: "Nice post".to_owned(),
            }]
        );
        assert_eq!(document.form_resets(), &[7]);
        assert_eq!(document.comment_form(7), None);
        assert!(document.alerts().is_empty());
        assert_eq!(texts(&document, "comment-contenu"), vec!["Nice post"]);
        assert_eq!(
            api.requests(),
            vec![
                "GET /posts/anglais",
                "GET /comments/7",
                "POST /comments",
                "GET /posts/anglais",
                "GET /comments/7",
            ]
        );
    }

    #[test]
    fn test_submit_rejected_keeps_form() {
        let api = MockApi::new()
            .with_post(post(7, "cyber"))
            .rejecting_comments(500);
        let board = Board::new(&api, RenderOptions::default());
        let mut document = Document::new("posts-container");
        board.load_posts(Category::Cyber, &mut document).unwrap();
        document.fill_comment_form(7, "bob@example.com", "Perdu ?");
        let before = document.inner_html();

        let form = document.comment_form(7).unwrap().clone();
        let err = board
            .submit_comment(&form, Category::Cyber, &mut document)
            .unwrap_err();

        assert!(matches!(err, BoardError::Submit { post_id: 7, .. }));
        assert_eq!(
            document.alerts(),
            &[board.options().labels.submit_error.clone()]
        );
        assert!(document.form_resets().is_empty());
        assert_eq!(document.comment_form(7), Some(&form));
        assert_eq!(document.inner_html(), before);
        assert_eq!(api.requests().last().map(String::as_str), Some("POST /comments"));
    }

    #[test]
    fn test_invalid_form_sends_nothing() {
        let api = MockApi::new().with_post(post(7, "cyber"));
        let board = Board::new(&api, RenderOptions::default());
        let mut document = Document::new("posts-container");

        let form = CommentForm::new(7, "", "Sans email");
        let err = board
            .submit_comment(&form, Category::Cyber, &mut document)
            .unwrap_err();

        assert!(matches!(err, BoardError::Validation(_)));
        assert_eq!(
            document.alerts(),
            &[board.options().labels.invalid_form.clone()]
        );
        assert!(api.requests().is_empty());
        assert!(api.created_comments().is_empty());
    }

    #[test]
    fn test_reload_failure_after_submit_is_not_an_error() {
        let api = MockApi::new().failing_posts();
        let board = Board::new(&api, RenderOptions::default());
        let mut document = Document::new("posts-container");

        let form = CommentForm::new(3, "bob@example.com", "Ok");
        let created = board
            .submit_comment(&form, Category::Info, &mut document)
            .unwrap();

        assert!(created.is_some());
        assert_eq!(document.form_resets(), &[3]);
        assert_eq!(
            texts(&document, "load-error"),
            vec![board.options().labels.posts_load_error.clone()]
        );
    }
}
