//! Read-only slug to post mapping

use indexmap::IndexMap;
use std::collections::BTreeMap;

use super::PostRecord;
use crate::error::{ContentError, ResolveError};

/// A slug must be a single, non-empty path segment that is not hidden
pub fn check_slug(slug: &str) -> Result<(), ContentError> {
    let separator = |c: char| c == '/' || c == '\\';
    if slug.is_empty() || slug.starts_with('.') || slug.contains(separator) {
        return Err(ContentError::InvalidSlug {
            slug: slug.to_string(),
        });
    }
    Ok(())
}

/// Collects posts before the store is frozen
#[derive(Debug, Default)]
pub struct ContentStoreBuilder {
    posts: IndexMap<String, PostRecord>,
}

impl ContentStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a post. A later definition for the same slug replaces the earlier one.
    pub fn insert(&mut self, slug: impl Into<String>, post: PostRecord) -> &mut Self {
        let slug = slug.into();
        if let Some(previous) = self.posts.insert(slug.clone(), post) {
            tracing::warn!(
                "Slug {:?} defined more than once, replacing {:?}",
                slug,
                previous.title
            );
        }
        self
    }

    pub fn extend<I, S>(&mut self, posts: I) -> &mut Self
    where
        I: IntoIterator<Item = (S, PostRecord)>,
        S: Into<String>,
    {
        for (slug, post) in posts {
            self.insert(slug, post);
        }
        self
    }

    /// Freeze the collected posts
    pub fn build(self) -> ContentStore {
        ContentStore { posts: self.posts }
    }
}

/// All posts of the site keyed by slug. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    posts: IndexMap<String, PostRecord>,
}

impl ContentStore {
    pub fn builder() -> ContentStoreBuilder {
        ContentStoreBuilder::new()
    }

    /// Look up a post by exact, case-sensitive slug
    pub fn resolve(&self, slug: &str) -> Result<&PostRecord, ResolveError> {
        self.posts.get(slug).ok_or_else(|| ResolveError::NotFound {
            slug: slug.to_string(),
        })
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.posts.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// (slug, post) pairs in load order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostRecord)> {
        self.posts.iter().map(|(slug, post)| (slug.as_str(), post))
    }

    /// Posts in blog index order: newest first, undated last, then by id and slug
    pub fn index(&self) -> Vec<(&str, &PostRecord)> {
        let mut posts: Vec<_> = self.iter().collect();
        posts.sort_by(|(slug_a, a), (slug_b, b)| {
            let dates = match (a.published_on(), b.published_on()) {
                (Some(da), Some(db)) => db.cmp(&da),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            };
            dates.then(a.id.cmp(&b.id)).then(slug_a.cmp(slug_b))
        });
        posts
    }

    /// Category name to post count
    pub fn categories(&self) -> BTreeMap<&str, usize> {
        let mut categories = BTreeMap::new();
        for post in self.posts.values() {
            *categories.entry(post.category.as_str()).or_insert(0) += 1;
        }
        categories
    }
}
