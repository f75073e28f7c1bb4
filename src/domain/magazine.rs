//! Magazine domain model
//!
//! Magazines own the ordered list of articles published in them, plus a
//! name and category that stay mutable for the magazine's lifetime but are
//! revalidated on every assignment.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::archive::Archive;
use super::id::{ArticleId, AuthorId, MagazineId};
use super::validate::{Category, MagazineName, ValidationError};

/// Authors must clear this many articles in a magazine before they count
/// as contributing authors (strictly more than).
const CONTRIBUTING_THRESHOLD: usize = 2;

/// A magazine that publishes articles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Magazine {
    id: MagazineId,
    name: MagazineName,
    category: Category,
    articles: Vec<ArticleId>,
}

impl Magazine {
    pub(crate) fn new(id: MagazineId, name: MagazineName, category: Category) -> Self {
        Self {
            id,
            name,
            category,
            articles: Vec::new(),
        }
    }

    /// Returns this magazine's ID
    pub fn id(&self) -> MagazineId {
        self.id
    }

    /// Returns the magazine's name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the magazine's category
    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    /// Renames the magazine. The new name is validated with the same rules
    /// as at registration (2 to 16 characters).
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = MagazineName::new(name)?;
        Ok(())
    }

    /// Recategorizes the magazine. The new category must be non-empty.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        self.category = Category::new(category)?;
        Ok(())
    }

    /// Returns the articles published in this magazine, in publication order
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    /// Returns the distinct authors who have published in this magazine
    pub fn contributors(&self, archive: &Archive) -> HashSet<AuthorId> {
        self.articles
            .iter()
            .filter_map(|id| archive.article(*id))
            .map(|article| article.author())
            .collect()
    }

    /// Returns the titles of this magazine's articles in publication order,
    /// or `None` if it has published nothing yet.
    pub fn article_titles<'a>(&self, archive: &'a Archive) -> Option<Vec<&'a str>> {
        if self.articles.is_empty() {
            return None;
        }

        Some(
            self.articles
                .iter()
                .filter_map(|id| archive.article(*id))
                .map(|article| article.title())
                .collect(),
        )
    }

    /// Returns the authors with strictly more than 2 articles in this
    /// magazine, or `None` when no author clears the threshold.
    pub fn contributing_authors(&self, archive: &Archive) -> Option<HashSet<AuthorId>> {
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in self.articles.iter().filter_map(|id| archive.article(*id)) {
            *counts.entry(article.author()).or_insert(0) += 1;
        }

        let heavy: HashSet<AuthorId> = counts
            .into_iter()
            .filter(|(_, count)| *count > CONTRIBUTING_THRESHOLD)
            .map(|(author, _)| author)
            .collect();

        if heavy.is_empty() {
            None
        } else {
            Some(heavy)
        }
    }

    pub(crate) fn record_article(&mut self, id: ArticleId) {
        self.articles.push(id);
    }
}
