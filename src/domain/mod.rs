//! Domain layer - Content model, taxonomy terms and reconciliation

pub mod breadcrumbs;
pub mod content;
pub mod markup;
pub mod reconcile;
pub mod robots;
pub mod schema;
pub mod term;

pub use content::{Post, PostId, PostKind, PostStatus, SeoMeta};
pub use reconcile::{reconcile, ReconcileReport, ReconcileRequest, TaxonomyReport, TermStore};
pub use term::{TaxonomyKind, Term, TermId};
