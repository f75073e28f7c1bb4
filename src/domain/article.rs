//! Article domain model
//!
//! Articles are the join entity of the model: each one ties exactly one
//! author to exactly one magazine. Publication through
//! [`Archive::publish`](crate::domain::Archive::publish) registers the
//! article with its author, its magazine, and the archive-wide registry.

use serde::{Deserialize, Serialize};

use super::id::{ArticleId, AuthorId, MagazineId};
use super::validate::{Title, ValidationError};

/// A published article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    id: ArticleId,
    title: Title,
    author: AuthorId,
    magazine: MagazineId,
}

impl Article {
    pub(crate) fn new(id: ArticleId, author: AuthorId, magazine: MagazineId, title: Title) -> Self {
        Self {
            id,
            title,
            author,
            magazine,
        }
    }

    /// Returns this article's ID
    pub fn id(&self) -> ArticleId {
        self.id
    }

    /// Returns the article's title
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the author who wrote this article
    pub fn author(&self) -> AuthorId {
        self.author
    }

    /// Returns the magazine that published this article
    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    /// Rejects any attempt to change the title.
    ///
    /// Titles are write-once: publication already set this one, so every
    /// candidate is refused before it is even validated.
    pub fn set_title(&mut self, _candidate: impl Into<String>) -> Result<(), ValidationError> {
        Err(ValidationError::TitleAlreadySet)
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_article() -> Article {
        Article::new(
            ArticleId::from_index(0),
            AuthorId::from_index(0),
            MagazineId::from_index(0),
            Title::new("A Perfectly Valid Title").unwrap(),
        )
    }

    #[test]
    fn accessors_read_back_construction_values() {
        let article = make_article();

        assert_eq!(article.title(), "A Perfectly Valid Title");
        assert_eq!(article.author(), AuthorId::from_index(0));
        assert_eq!(article.magazine(), MagazineId::from_index(0));
    }

    #[test]
    fn title_cannot_be_reassigned() {
        let mut article = make_article();
        let before = article.title().to_string();

        // Rejected even when the replacement would itself be valid
        let err = article.set_title("Another Valid Title").unwrap_err();
        assert_eq!(err, ValidationError::TitleAlreadySet);
        assert_eq!(article.title(), before);
    }

    #[test]
    fn title_reassignment_rejects_invalid_candidates_the_same_way() {
        let mut article = make_article();

        let err = article.set_title("x").unwrap_err();
        assert_eq!(err, ValidationError::TitleAlreadySet);
    }
}
