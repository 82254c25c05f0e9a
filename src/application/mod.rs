//! Application layer - Use cases and orchestration

pub mod apply_terms;
pub mod breadcrumbs;
pub mod build_sitemap;
pub mod init;
pub mod manage_config;
pub mod notices;
pub mod render_head;

pub use apply_terms::{ApplyTermsOptions, ApplyTermsService, TermApplication};
pub use breadcrumbs::BreadcrumbService;
pub use build_sitemap::SitemapService;
pub use init::InitService;
pub use manage_config::ConfigService;
pub use notices::NoticesService;
pub use render_head::{HeadOutput, HeadService};
