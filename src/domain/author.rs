//! Author domain model
//!
//! Authors own the ordered list of articles they have written. The list is
//! append-only and populated exclusively by article publication; nothing is
//! ever removed from it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::archive::Archive;
use super::id::{ArticleId, AuthorId, MagazineId};
use super::validate::AuthorName;

/// An author of articles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
    articles: Vec<ArticleId>,
}

impl Author {
    pub(crate) fn new(id: AuthorId, name: AuthorName) -> Self {
        Self {
            id,
            name,
            articles: Vec::new(),
        }
    }

    /// Returns this author's ID
    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// Returns the author's name. Names are immutable after registration.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the articles written by this author, in publication order
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    /// Returns the distinct magazines this author has published in.
    ///
    /// Deduplication is by magazine identity: two magazines registered with
    /// identical name and category still count separately.
    pub fn magazines(&self, archive: &Archive) -> HashSet<MagazineId> {
        self.articles
            .iter()
            .filter_map(|id| archive.article(*id))
            .map(|article| article.magazine())
            .collect()
    }

    /// Returns the distinct categories of the magazines this author has
    /// published in, or `None` if the author has no articles yet.
    pub fn topic_areas<'a>(&self, archive: &'a Archive) -> Option<HashSet<&'a str>> {
        if self.articles.is_empty() {
            return None;
        }

        Some(
            self.articles
                .iter()
                .filter_map(|id| archive.article(*id))
                .filter_map(|article| archive.magazine(article.magazine()))
                .map(|magazine| magazine.category())
                .collect(),
        )
    }

    pub(crate) fn record_article(&mut self, id: ArticleId) {
        self.articles.push(id);
    }
}
