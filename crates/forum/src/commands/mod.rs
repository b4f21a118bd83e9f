//! CLI command implementations.

mod category;
mod comment;
mod comments;
mod posts;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use forum_client::ForumClient;
use forum_config::{CliSettings, Config, DisplayConfig};
use forum_model::Category;
use forum_renderer::{Labels, RenderOptions};
use tracing::debug;

use crate::error::CliError;
use crate::output::Output;

pub(crate) use category::CategoryArgs;
pub(crate) use comment::CommentArgs;
pub(crate) use comments::CommentsArgs;
pub(crate) use posts::PostsArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover forum.toml).
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// API base URL (overrides config).
    #[arg(long, global = true, env = "FORUM_BASE_URL")]
    pub(crate) base_url: Option<String>,

    /// Request timeout in seconds (overrides config).
    #[arg(long, global = true)]
    pub(crate) timeout: Option<u64>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

impl GlobalArgs {
    /// Load the configuration with these options applied.
    fn load_config(&self, path: Option<&str>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
            path: path.map(str::to_owned),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        match &config.config_path {
            Some(path) => debug!("Loaded config from {}", path.display()),
            None => debug!("No forum.toml found, using defaults"),
        }
        Ok(config)
    }
}

/// How a command picks the category it shows.
#[derive(Args)]
pub(crate) struct SelectArgs {
    /// Page path the category is resolved from (overrides config).
    #[arg(long, conflicts_with = "category")]
    pub(crate) path: Option<String>,

    /// Category to show, bypassing path resolution.
    #[arg(long)]
    pub(crate) category: Option<Category>,
}

impl SelectArgs {
    /// The explicit category, or the one resolved from the configured path.
    fn resolve(&self, config: &Config) -> Category {
        self.category
            .unwrap_or_else(|| Category::resolve(&config.page.path))
    }
}

/// Build an HTTP client from the `[server]` section.
fn create_client(config: &Config) -> ForumClient {
    ForumClient::new(
        &config.server.base_url,
        Duration::from_secs(config.server.timeout_secs),
    )
}

/// Render options from the `[display]` section, with unset labels left at
/// their defaults.
fn render_options(display: &DisplayConfig) -> RenderOptions {
    let overrides = &display.labels;
    let defaults = Labels::default();
    let pick = |value: &Option<String>, default: String| value.clone().unwrap_or(default);

    RenderOptions {
        date_format: display.date_format.clone(),
        labels: Labels {
            posted_by: pick(&overrides.posted_by, defaults.posted_by),
            no_posts: pick(&overrides.no_posts, defaults.no_posts),
            no_comments: pick(&overrides.no_comments, defaults.no_comments),
            comment_by: pick(&overrides.comment_by, defaults.comment_by),
            email_placeholder: pick(&overrides.email_placeholder, defaults.email_placeholder),
            comment_placeholder: pick(
                &overrides.comment_placeholder,
                defaults.comment_placeholder,
            ),
            submit: pick(&overrides.submit, defaults.submit),
            posts_load_error: pick(&overrides.posts_load_error, defaults.posts_load_error),
            comments_load_error: pick(
                &overrides.comments_load_error,
                defaults.comments_load_error,
            ),
            submit_error: pick(&overrides.submit_error, defaults.submit_error),
            invalid_form: pick(&overrides.invalid_form, defaults.invalid_form),
        },
    }
}

/// Write rendered HTML to `out`, or stdout when no file is given.
fn write_html(html: &str, out: Option<&Path>, output: &Output) -> Result<(), CliError> {
    match out {
        Some(path) => {
            std::fs::write(path, format!("{html}\n"))?;
            output.success(&format!("Wrote {}", path.display()));
        }
        None => writeln!(std::io::stdout().lock(), "{html}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let options = render_options(&DisplayConfig::default());
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_render_options_label_override() {
        let mut display = DisplayConfig {
            date_format: "%Y-%m-%d".to_owned(),
            ..Default::default()
        };
        display.labels.no_posts = Some("Nothing yet.".to_owned());
        display.labels.submit = Some("Send".to_owned());

        let options = render_options(&display);

        assert_eq!(options.date_format, "%Y-%m-%d");
        assert_eq!(options.labels.no_posts, "Nothing yet.");
        assert_eq!(options.labels.submit, "Send");
        assert_eq!(options.labels.posted_by, Labels::default().posted_by);
    }

    #[test]
    fn test_select_explicit_category() {
        let config = Config::default();
        let select = SelectArgs {
            path: None,
            category: Some(Category::Anglais),
        };
        assert_eq!(select.resolve(&config), Category::Anglais);
    }

    #[test]
    fn test_select_from_config_path() {
        let mut config = Config::default();
        config.page.path = "/pages/info.html".to_owned();
        let select = SelectArgs {
            path: None,
            category: None,
        };
        assert_eq!(select.resolve(&config), Category::Info);
    }

    #[test]
    fn test_load_config_applies_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forum.toml");
        std::fs::write(&path, "[server]\nbase_url = \"http://forum.test\"\n").unwrap();

        let global = GlobalArgs {
            config: Some(path),
            base_url: None,
            timeout: Some(5),
            verbose: false,
        };
        let config = global.load_config(Some("/cyber.html")).unwrap();

        assert_eq!(config.server.base_url, "http://forum.test");
        assert_eq!(config.server.timeout_secs, 5);
        assert_eq!(config.page.path, "/cyber.html");
    }

    #[test]
    fn test_write_html_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");

        write_html("<p>x</p>", Some(path.as_path()), &Output::new()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>x</p>\n");
    }
}
