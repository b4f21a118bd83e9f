//! Render options and user-visible strings.

use crate::date::DEFAULT_DATE_FORMAT;

/// User-visible strings of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Prefix of the post author line.
    pub posted_by: String,
    /// Placeholder when a category has no posts.
    pub no_posts: String,
    /// Placeholder when a post has no comments.
    pub no_comments: String,
    /// Word introducing a comment's author.
    pub comment_by: String,
    /// Placeholder of the email field.
    pub email_placeholder: String,
    /// Placeholder of the comment field.
    pub comment_placeholder: String,
    /// Submit button text.
    pub submit: String,
    /// Notice shown when posts cannot be loaded.
    pub posts_load_error: String,
    /// Notice shown when a comment thread cannot be loaded.
    pub comments_load_error: String,
    /// Alert shown when a comment submission fails.
    pub submit_error: String,
    /// Alert shown when a comment form is incomplete.
    pub invalid_form: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            posted_by: "Posté par :".to_owned(),
            no_posts: "Aucun post pour le moment dans cette catégorie. Sois le premier à poster ! ✨"
                .to_owned(),
            no_comments: "Aucun commentaire pour le moment.".to_owned(),
            comment_by: "par".to_owned(),
            email_placeholder: "Votre email".to_owned(),
            comment_placeholder: "Votre commentaire".to_owned(),
            submit: "Commenter".to_owned(),
            posts_load_error: "Impossible de charger les posts.".to_owned(),
            comments_load_error: "Impossible de charger les commentaires.".to_owned(),
            submit_error: "Erreur lors de l'envoi du commentaire.".to_owned(),
            invalid_form: "Renseigne un email valide et un commentaire.".to_owned(),
        }
    }
}

/// Options shared by all render functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// strftime format for timestamps.
    pub date_format: String,
    /// User-visible strings.
    pub labels: Labels,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
            labels: Labels::default(),
        }
    }
}
