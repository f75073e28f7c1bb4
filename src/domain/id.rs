//! Typed identifiers for archive entities
//!
//! ID Format:
//! - Author IDs: `au-{index}` (e.g., `au-0`)
//! - Magazine IDs: `mg-{index}` (e.g., `mg-3`)
//! - Article IDs: `ar-{index}` (e.g., `ar-12`)
//!
//! The index is the entity's position in its archive arena, assigned at
//! registration and never reused. IDs are only meaningful against the
//! archive that issued them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid author ID format: expected 'au-{{index}}', got '{0}'")]
    InvalidAuthorId(String),

    #[error("Invalid magazine ID format: expected 'mg-{{index}}', got '{0}'")]
    InvalidMagazineId(String),

    #[error("Invalid article ID format: expected 'ar-{{index}}', got '{0}'")]
    InvalidArticleId(String),
}

/// Parses `{prefix}{digits}` into an index
fn parse_index(s: &str, prefix: &str) -> Option<usize> {
    let rest = s.trim().strip_prefix(prefix)?;
    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

/// Author ID in the format `au-{index}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorId(usize);

impl AuthorId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index this ID refers to
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "au-{}", self.0)
    }
}

impl FromStr for AuthorId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_index(s, "au-")
            .map(Self)
            .ok_or_else(|| IdError::InvalidAuthorId(s.to_string()))
    }
}

impl TryFrom<String> for AuthorId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AuthorId> for String {
    fn from(id: AuthorId) -> Self {
        id.to_string()
    }
}

/// Magazine ID in the format `mg-{index}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MagazineId(usize);

impl MagazineId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index this ID refers to
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MagazineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mg-{}", self.0)
    }
}

impl FromStr for MagazineId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_index(s, "mg-")
            .map(Self)
            .ok_or_else(|| IdError::InvalidMagazineId(s.to_string()))
    }
}

impl TryFrom<String> for MagazineId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MagazineId> for String {
    fn from(id: MagazineId) -> Self {
        id.to_string()
    }
}

/// Article ID in the format `ar-{index}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArticleId(usize);

impl ArticleId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index this ID refers to
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ar-{}", self.0)
    }
}

impl FromStr for ArticleId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_index(s, "ar-")
            .map(Self)
            .ok_or_else(|| IdError::InvalidArticleId(s.to_string()))
    }
}

impl TryFrom<String> for ArticleId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ArticleId> for String {
    fn from(id: ArticleId) -> Self {
        id.to_string()
    }
}
