//! Escaping of untrusted text.

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Escape text for safe embedding as HTML element content.
///
/// `&`, `<` and `>` are replaced by entities, so the result always renders as
/// literal text.
///
/// # Examples
///
/// ```
/// use forum_renderer::sanitize;
///
/// assert_eq!(sanitize("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
/// ```
#[must_use]
pub fn sanitize(text: &str) -> String {
    encode_text(text).into_owned()
}

/// Escape text for a double-quoted attribute value.
#[must_use]
pub fn sanitize_attribute(value: &str) -> String {
    encode_double_quoted_attribute(value).into_owned()
}
