//! Domain models for the masthead archive
//!
//! Contains the core editorial model without any I/O concerns.

mod id;
mod validate;
mod article;
mod author;
mod magazine;
mod archive;

pub use id::{ArticleId, AuthorId, IdError, MagazineId};
pub use validate::{
    AuthorName, Category, MagazineName, Title, ValidationError, MAGAZINE_NAME_MAX,
    MAGAZINE_NAME_MIN, TITLE_MAX, TITLE_MIN,
};
pub use article::Article;
pub use author::Author;
pub use magazine::Magazine;
pub use archive::Archive;
