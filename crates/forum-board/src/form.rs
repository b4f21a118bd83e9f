//! Comment form values.

use forum_model::{NewComment, PostId};

use crate::error::BoardError;

/// Values of one post's comment form at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentForm {
    /// Post the form belongs to.
    pub post_id: PostId,
    /// Email field.
    pub email: String,
    /// Comment field.
    pub contenu: String,
}

impl CommentForm {
    /// Create form values for a post.
    pub fn new(post_id: PostId, email: impl Into<String>, contenu: impl Into<String>) -> Self {
        Self {
            post_id,
            email: email.into(),
            contenu: contenu.into(),
        }
    }

    /// Check the fields the page marks as required.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] if the email is blank or has no `@`,
    /// or the comment is blank.
    pub fn validate(&self) -> Result<(), BoardError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(BoardError::Validation("email is required".to_owned()));
        }
        if !email.contains('@') {
            return Err(BoardError::Validation(format!(
                "'{email}' is not an email address"
            )));
        }
        if self.contenu.trim().is_empty() {
            return Err(BoardError::Validation("comment is required".to_owned()));
        }
        Ok(())
    }

    /// Request body for this form, with the fields exactly as entered.
    #[must_use]
    pub fn to_new_comment(&self) -> NewComment {
        NewComment {
            post_id: self.post_id,
            email: self.email.clone(),
            contenu: self.contenu.clone(),
        }
    }
}
