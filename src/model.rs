//! Core data types for `estante`.
//!
//! Same serde field names across the JSON and CSV codecs so files are
//! interoperable between the two.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One book entry on the shelf.
///
/// Immutable by convention: there are no mutation methods, and none of the
/// fields are validated. Duplicate entries are permitted and treated as
/// independent records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Title.
    pub title: String,

    /// Author, matched exactly (case-sensitive) by queries.
    pub author: String,

    /// Publication year. Not checked against a real calendar range.
    pub year: i32,

    /// Genre, matched exactly (case-sensitive) by queries.
    pub genre: String,
}

impl Book {
    /// Create a book from its four fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book(title='{}', author='{}', year={}, genre='{}')",
            self.title, self.author, self.year, self.genre
        )
    }
}
