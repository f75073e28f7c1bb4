//! Masthead - an in-memory editorial domain model
//!
//! Masthead models the many-to-many relationship between authors and
//! magazines through the articles that join them. An [`Archive`] owns the
//! entities and their append-only registries; aggregate queries ("top
//! publisher", "contributing authors") are computed over those registries.
//! There is no persistence and no concurrency control: a single archive on
//! a single thread, initialized explicitly.

pub mod domain;

pub use domain::{
    Archive, Article, ArticleId, Author, AuthorId, Magazine, MagazineId, ValidationError,
};
