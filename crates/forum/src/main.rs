//! Forum CLI - category board from the terminal.
//!
//! Provides commands for:
//! - `category`: Print the category a page path resolves to
//! - `posts`: Render the posts of a category with their comments
//! - `comments`: Render the comment thread of one post
//! - `comment`: Submit a comment and render the refreshed posts

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CategoryArgs, CommentArgs, CommentsArgs, GlobalArgs, PostsArgs};
use output::Output;

/// Forum - posts and comments by category.
#[derive(Parser)]
#[command(name = "forum", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the category a page path resolves to.
    Category(CategoryArgs),
    /// Render the posts of a category.
    Posts(PostsArgs),
    /// Render the comments of one post.
    Comments(CommentsArgs),
    /// Submit a comment on a post.
    Comment(CommentArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Category(args) => args.execute(),
        Commands::Posts(args) => args.execute(&cli.global),
        Commands::Comments(args) => args.execute(&cli.global),
        Commands::Comment(args) => args.execute(&cli.global),
    };

    if let Err(err) = result {
        output.error(&err.report());
        std::process::exit(1);
    }
}
