//! The archive: process-wide state for the editorial model
//!
//! An [`Archive`] owns every entity and the append-only registries the
//! aggregate queries scan. Construct one per process (or per test) and pass
//! it to the entity query methods; nothing in this crate touches implicit
//! global state. There is no teardown: registries only grow.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::article::Article;
use super::author::Author;
use super::id::{ArticleId, AuthorId, MagazineId};
use super::magazine::Magazine;
use super::validate::{AuthorName, Category, MagazineName, Title, ValidationError};

/// The single owner of authors, magazines, and articles.
///
/// `magazines` and `articles` double as the process-wide registries of the
/// model: every registered magazine and every published article stays in
/// them, in insertion order, for the archive's lifetime.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archive {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl Archive {
    /// Creates an empty archive
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new author.
    ///
    /// Fails with [`ValidationError::EmptyAuthorName`] unless the name is
    /// non-empty. The name is immutable afterwards.
    pub fn add_author(&mut self, name: impl Into<String>) -> Result<AuthorId, ValidationError> {
        let name = AuthorName::new(name)?;
        let id = AuthorId::from_index(self.authors.len());
        debug!("registered author {} ({})", id, name);
        self.authors.push(Author::new(id, name));
        Ok(id)
    }

    /// Registers a new magazine in the magazine registry.
    ///
    /// Fails unless the name is 2 to 16 characters and the category is
    /// non-empty. Both stay mutable via [`Archive::magazine_mut`].
    pub fn add_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<MagazineId, ValidationError> {
        let name = MagazineName::new(name)?;
        let category = Category::new(category)?;
        let id = MagazineId::from_index(self.magazines.len());
        debug!("registered magazine {} ({})", id, name);
        self.magazines.push(Magazine::new(id, name, category));
        Ok(id)
    }

    /// Publishes a new article by `author` in `magazine`.
    ///
    /// This is the only multi-effect operation in the model: on success the
    /// article is appended to the author's collection, the magazine's
    /// collection, and the archive-wide article registry. All validation
    /// runs before the first append, so a failed publish leaves no partial
    /// registration behind.
    pub fn publish(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId, ValidationError> {
        if self.author(author).is_none() {
            return Err(ValidationError::UnknownAuthor(author));
        }
        if self.magazine(magazine).is_none() {
            return Err(ValidationError::UnknownMagazine(magazine));
        }
        let title = Title::new(title)?;

        let id = ArticleId::from_index(self.articles.len());
        debug!("published article {} ({}) by {} in {}", id, title, author, magazine);
        self.articles.push(Article::new(id, author, magazine, title));
        self.authors[author.index()].record_article(id);
        self.magazines[magazine.index()].record_article(id);
        Ok(id)
    }

    /// Returns the author with the given ID, if it was issued by this archive
    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(id.index())
    }

    /// Returns the magazine with the given ID, if it was issued by this archive
    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(id.index())
    }

    /// Returns a mutable magazine for the validating name/category setters
    pub fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines.get_mut(id.index())
    }

    /// Returns the article with the given ID, if it was issued by this archive
    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(id.index())
    }

    /// Returns every registered author, in registration order
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Returns the magazine registry: every magazine ever registered, in
    /// registration order. Nothing is ever removed.
    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    /// Returns the article registry: every article ever published, in
    /// publication order. Nothing is ever removed.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Returns the number of registered authors
    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// Returns the number of registered magazines
    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    /// Returns the number of published articles
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Reassigns an article to a different author.
    ///
    /// The target must resolve in this archive. Per-entity article
    /// collections are publication-time records and are not rewritten by
    /// reassignment.
    pub fn set_article_author(
        &mut self,
        article: ArticleId,
        author: AuthorId,
    ) -> Result<(), ValidationError> {
        if self.author(author).is_none() {
            return Err(ValidationError::UnknownAuthor(author));
        }
        let entry = self
            .articles
            .get_mut(article.index())
            .ok_or(ValidationError::UnknownArticle(article))?;
        entry.set_author(author);
        Ok(())
    }

    /// Reassigns an article to a different magazine.
    ///
    /// Same contract as [`Archive::set_article_author`].
    pub fn set_article_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> Result<(), ValidationError> {
        if self.magazine(magazine).is_none() {
            return Err(ValidationError::UnknownMagazine(magazine));
        }
        let entry = self
            .articles
            .get_mut(article.index())
            .ok_or(ValidationError::UnknownArticle(article))?;
        entry.set_magazine(magazine);
        Ok(())
    }

    /// Attempts to retitle a published article. Always fails: titles are
    /// write-once and publication already wrote this one.
    pub fn set_article_title(
        &mut self,
        article: ArticleId,
        candidate: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let entry = self
            .articles
            .get_mut(article.index())
            .ok_or(ValidationError::UnknownArticle(article))?;
        entry.set_title(candidate)
    }

    /// Returns the magazine with the strictly greatest number of published
    /// articles, or `None` when no articles exist anywhere.
    ///
    /// When several magazines tie for the lead, which one wins is
    /// implementation-defined: the scan visits a `HashSet` of magazines and
    /// only a strictly greater count displaces the current leader.
    pub fn top_publisher(&self) -> Option<MagazineId> {
        let published: Vec<MagazineId> =
            self.articles.iter().map(|article| article.magazine()).collect();
        let distinct: HashSet<MagazineId> = published.iter().copied().collect();

        let mut best: Option<(MagazineId, usize)> = None;
        for magazine in distinct {
            let count = published.iter().filter(|m| **m == magazine).count();
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((magazine, count));
            }
        }
        best.map(|(magazine, _)| magazine)
    }
}
