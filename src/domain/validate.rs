//! Validated field newtypes
//!
//! Every piece of text entering the model is validated once, at the
//! boundary, and carried as a newtype afterwards, so entities never hold an
//! out-of-range value. Lengths are counted in characters, not bytes.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::id::{ArticleId, AuthorId, MagazineId};

/// Minimum magazine name length, in characters
pub const MAGAZINE_NAME_MIN: usize = 2;
/// Maximum magazine name length, in characters
pub const MAGAZINE_NAME_MAX: usize = 16;
/// Minimum article title length, in characters
pub const TITLE_MIN: usize = 5;
/// Maximum article title length, in characters
pub const TITLE_MAX: usize = 50;

/// The single domain error kind: a validation rule was violated at the
/// point of the failing operation. Never caught internally.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("author name must be a non-empty string")]
    EmptyAuthorName,

    #[error("magazine name must be between 2 and 16 characters, got {0}")]
    MagazineNameLength(usize),

    #[error("magazine category must be a non-empty string")]
    EmptyCategory,

    #[error("article title must be between 5 and 50 characters, got {0}")]
    TitleLength(usize),

    #[error("article title was fixed at publication and cannot be reassigned")]
    TitleAlreadySet,

    #[error("unknown author: {0}")]
    UnknownAuthor(AuthorId),

    #[error("unknown magazine: {0}")]
    UnknownMagazine(MagazineId),

    #[error("unknown article: {0}")]
    UnknownArticle(ArticleId),
}

/// A non-empty author name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyAuthorName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AuthorName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AuthorName> for String {
    fn from(name: AuthorName) -> Self {
        name.0
    }
}

/// A magazine name of 2 to 16 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MagazineName(String);

impl MagazineName {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let len = name.chars().count();
        if !(MAGAZINE_NAME_MIN..=MAGAZINE_NAME_MAX).contains(&len) {
            return Err(ValidationError::MagazineNameLength(len));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MagazineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MagazineName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MagazineName> for String {
    fn from(name: MagazineName) -> Self {
        name.0
    }
}

/// A non-empty magazine category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn new(category: impl Into<String>) -> Result<Self, ValidationError> {
        let category = category.into();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Ok(Self(category))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Category {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

/// An article title of 5 to 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        let len = title.chars().count();
        if !(TITLE_MIN..=TITLE_MAX).contains(&len) {
            return Err(ValidationError::TitleLength(len));
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Title {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}
