//! The Book record and its input shape

use crate::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A persisted catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Book {
    /// Identifier assigned by storage on creation
    pub id: i64,

    pub title: String,
    pub author: String,
    pub genre: String,
}

impl Book {
    /// Attach an id to validated input
    pub fn from_new(id: i64, new: NewBook) -> Self {
        Self {
            id,
            title: new.title,
            author: new.author,
            genre: new.genre,
        }
    }

    /// Value of the given searchable field
    pub fn field(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Genre => &self.genre,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} by {} [{}]",
            self.id, self.title, self.author, self.genre
        )
    }
}

/// Fields supplied when creating or replacing a book.
///
/// Missing JSON fields decode as empty strings so they are reported by
/// [`NewBook::validate`] rather than by the body decoder. An `id` in the
/// request body is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBook {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub genre: String,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
        }
    }

    /// Trim every field and reject any that ends up empty
    pub fn validate(self) -> Result<Self, ServiceError> {
        let validated = Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            genre: self.genre.trim().to_string(),
        };

        for (name, value) in [
            ("title", &validated.title),
            ("author", &validated.author),
            ("genre", &validated.genre),
        ] {
            if value.is_empty() {
                return Err(ServiceError::Validation(format!("{} must not be empty", name)));
            }
        }

        Ok(validated)
    }
}

/// Searchable book fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Title,
    Author,
    Genre,
}

impl BookField {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Genre => "genre",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookField {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(BookField::Title),
            "author" => Ok(BookField::Author),
            "genre" => Ok(BookField::Genre),
            _ => Err(ServiceError::InvalidField(s.to_string())),
        }
    }
}
