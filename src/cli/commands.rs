//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitemeta")]
#[command(about = "SEO metadata manager for file-based content sites", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Site name
        #[arg(short, long, default_value = "My Site")]
        name: String,

        /// Site base URL
        #[arg(short, long, default_value = "http://localhost")]
        url: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// List posts and pages
    List,

    /// Manage taxonomy terms
    Terms {
        #[command(subcommand)]
        command: TermsCommands,
    },

    /// Show and clear the pending notices for a post
    Notices {
        /// Post id
        post_id: u64,
    },

    /// Render the head block for a post
    Head {
        /// Post id
        post_id: u64,
    },

    /// Generate sitemap XML (the index, or one section)
    Sitemap {
        /// Section: posts, pages, categories or tags
        section: Option<String>,
    },

    /// Render a breadcrumb trail
    Breadcrumbs {
        /// Post id
        #[arg(conflicts_with_all = ["category", "tag"])]
        post_id: Option<u64>,

        /// Category slug
        #[arg(long, conflicts_with = "tag")]
        category: Option<String>,

        /// Tag slug
        #[arg(long)]
        tag: Option<String>,

        /// Separator between crumbs
        #[arg(long, default_value = " > ")]
        separator: String,

        /// Omit the leading Home crumb
        #[arg(long)]
        no_home: bool,

        /// Omit the trailing current-page crumb
        #[arg(long)]
        no_current: bool,

        /// Also emit BreadcrumbList JSON-LD
        #[arg(long)]
        json_ld: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TermsCommands {
    /// Apply comma-separated category/tag names to a post
    Apply {
        /// Post id
        post_id: u64,

        /// Comma-separated category names
        #[arg(short, long, default_value = "")]
        categories: String,

        /// Comma-separated tag names
        #[arg(short, long, default_value = "")]
        tags: String,

        /// Replace the post's categories instead of merging
        #[arg(long)]
        replace_categories: bool,

        /// Replace the post's tags instead of merging
        #[arg(long)]
        replace_tags: bool,

        /// Do not create missing terms; report them as errors
        #[arg(long)]
        no_auto_create: bool,

        /// Print the JSON response envelope
        #[arg(long)]
        json: bool,
    },

    /// List registered terms
    List,
}
