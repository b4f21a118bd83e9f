//! Timestamp formatting.

use std::fmt::{Display, Write};

use chrono::format::{Fixed, Item, StrftimeItems};
use chrono::{DateTime, NaiveDateTime};

/// Short day/month/year plus hour:minute, as in the `fr-FR` short style.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Naive layouts accepted besides RFC 3339. The first is what `SQLite`'s
/// `datetime('now')` produces.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Check that a strftime format string can render every accepted timestamp.
///
/// Invalid specifiers are rejected, and so are offset and zone specifiers
/// (`%z`, `%:z`, `%#z`, `%Z`, `%+`): naive timestamps have no offset to print.
#[must_use]
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| match item {
        Item::Error => true,
        Item::Fixed(fixed) => needs_offset(&fixed),
        _ => false,
    })
}

fn needs_offset(fixed: &Fixed) -> bool {
    matches!(
        fixed,
        Fixed::TimezoneName
            | Fixed::TimezoneOffset
            | Fixed::TimezoneOffsetColon
            | Fixed::TimezoneOffsetDoubleColon
            | Fixed::TimezoneOffsetTripleColon
            | Fixed::TimezoneOffsetColonZ
            | Fixed::TimezoneOffsetZ
            | Fixed::RFC2822
            | Fixed::RFC3339
            | Fixed::Internal(_)
    )
}

/// Render a server timestamp as a short date+time string.
///
/// Timestamps with an offset keep their own wall-clock time. Unparseable
/// input is returned unchanged; an invalid `format` falls back to
/// [`DEFAULT_DATE_FORMAT`].
///
/// # Examples
///
/// ```
/// use forum_renderer::{DEFAULT_DATE_FORMAT, format_date};
///
/// assert_eq!(format_date("2024-03-01 10:15:00", DEFAULT_DATE_FORMAT), "01/03/2024 10:15");
/// ```
#[must_use]
pub fn format_date(timestamp: &str, format: &str) -> String {
    let format = if is_valid_date_format(format) {
        format
    } else {
        DEFAULT_DATE_FORMAT
    };
    let timestamp = timestamp.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return render(dt.format(format), timestamp);
    }

    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(timestamp, layout).ok())
        .map_or_else(
            || timestamp.to_owned(),
            |dt| render(dt.format(format), timestamp),
        )
}

/// Write a formatted date, or return `raw` if the format cannot be rendered.
fn render(formatted: impl Display, raw: &str) -> String {
    let mut out = String::new();
    match write!(out, "{formatted}") {
        Ok(()) => out,
        Err(_) => raw.to_owned(),
    }
}
