//! Breadcrumb trail construction use case
//!
//! Walks parent pointers to build the trail: page parent chains, a post's
//! primary category ancestry, or a term's ancestry. Rendering lives in the
//! domain layer.

use crate::domain::breadcrumbs::{BreadcrumbOptions, Crumb};
use crate::domain::content::{Post, PostId, PostKind};
use crate::domain::term::{TaxonomyKind, Term, TermId};
use crate::error::{Result, SiteMetaError};
use crate::infrastructure::{FileSystemStore, SiteConfig};

/// Service for building breadcrumb trails
pub struct BreadcrumbService {
    store: FileSystemStore,
    config: SiteConfig,
}

impl BreadcrumbService {
    pub fn new(store: FileSystemStore, config: SiteConfig) -> Self {
        BreadcrumbService { store, config }
    }

    /// Trail for a post or page
    pub fn trail_for_post(&self, post_id: u64, options: &BreadcrumbOptions) -> Result<Vec<Crumb>> {
        let post = self.store.load_post(PostId(post_id))?;
        let mut crumbs = self.home_crumb(options);

        match post.kind {
            PostKind::Page => {
                crumbs.extend(self.page_ancestors(&post)?);
            }
            PostKind::Post => {
                // The first assigned category is the primary one
                if let Some(category_id) = post.categories.first() {
                    if let Some(category) = self.store.term(*category_id)? {
                        crumbs.extend(self.term_ancestors(&category)?);
                        crumbs.push(Crumb::link(
                            category.name.clone(),
                            category.link(&self.config.base_url),
                        ));
                    }
                }
            }
        }

        if options.show_current {
            crumbs.push(Crumb::current(post.title.clone()));
        }
        Ok(crumbs)
    }

    /// Trail for a term archive, looked up by slug
    pub fn trail_for_term(
        &self,
        slug: &str,
        kind: TaxonomyKind,
        options: &BreadcrumbOptions,
    ) -> Result<Vec<Crumb>> {
        let term = self
            .store
            .term_by_slug(slug, kind)?
            .ok_or_else(|| SiteMetaError::TermNotFound(slug.to_string()))?;

        let mut crumbs = self.home_crumb(options);
        crumbs.extend(self.term_ancestors(&term)?);
        if options.show_current {
            crumbs.push(Crumb::current(term.name.clone()));
        }
        Ok(crumbs)
    }

    fn home_crumb(&self, options: &BreadcrumbOptions) -> Vec<Crumb> {
        if options.show_home {
            vec![Crumb::link(
                options.home_text.clone(),
                format!("{}/", self.config.base_url.trim_end_matches('/')),
            )]
        } else {
            Vec::new()
        }
    }

    /// Ancestor pages of a page, outermost first
    fn page_ancestors(&self, post: &Post) -> Result<Vec<Crumb>> {
        let mut ancestors = Vec::new();
        let mut visited = vec![post.id];
        let mut parent = post.parent;

        while let Some(parent_id) = parent {
            // Guard against parent cycles in hand-edited front matter
            if visited.contains(&parent_id) {
                break;
            }
            visited.push(parent_id);

            let parent_post = self.store.load_post(parent_id)?;
            ancestors.push(Crumb::link(
                parent_post.title.clone(),
                parent_post.permalink(&self.config.base_url),
            ));
            parent = parent_post.parent;
        }

        ancestors.reverse();
        Ok(ancestors)
    }

    /// Ancestor terms of a category, outermost first. Tags are flat.
    fn term_ancestors(&self, term: &Term) -> Result<Vec<Crumb>> {
        let mut ancestors = Vec::new();
        let mut visited: Vec<TermId> = vec![term.id];
        let mut parent = term.parent;

        while let Some(parent_id) = parent {
            if visited.contains(&parent_id) {
                break;
            }
            visited.push(parent_id);

            let parent_term = match self.store.term(parent_id)? {
                Some(t) => t,
                None => break,
            };
            ancestors.push(Crumb::link(
                parent_term.name.clone(),
                parent_term.link(&self.config.base_url),
            ));
            parent = parent_term.parent;
        }

        ancestors.reverse();
        Ok(ancestors)
    }
}
