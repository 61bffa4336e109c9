//! In-memory book shelf backed by `Vec`.
//!
//! All data lives in memory, insertion order preserved. Each supported
//! file format has a save/load pair; the load semantics differ by format
//! and are documented on each method.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::format::{self, BackupFormat};
use crate::model::Book;
use crate::query::BookFilters;

/// Ordered collection of [`Book`] records with query and persistence
/// operations.
///
/// The shelf owns its records exclusively. Insertion order is preserved
/// and reflects load/add order.
#[derive(Debug, Default)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a new empty shelf.
    #[must_use]
    pub const fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Append a book to the end of the shelf.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// All books, in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books on the shelf.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Titles in shelf order.
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.books.iter().map(|book| book.title.as_str()).collect()
    }

    /// Books whose author matches exactly (case-sensitive), in shelf order.
    #[must_use]
    pub fn find_by_author(&self, author: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.author == author)
            .collect()
    }

    /// Count of books whose genre matches exactly.
    #[must_use]
    pub fn count_by_genre(&self, genre: &str) -> usize {
        self.books.iter().filter(|book| book.genre == genre).count()
    }

    /// Books passing both optional filters, in shelf order.
    ///
    /// A book matches when `(min_year is absent OR year >= min_year) AND
    /// (genre is absent OR genre matches exactly)`.
    #[must_use]
    pub fn filter(&self, filters: &BookFilters) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| {
                filters.min_year.is_none_or(|min| book.year >= min)
                    && filters
                        .genre
                        .as_deref()
                        .is_none_or(|genre| book.genre == genre)
            })
            .collect()
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Save the shelf as delimited text.
    ///
    /// # Errors
    ///
    /// Returns `Io` on write failure.
    pub fn save_text(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        format::text::save(path, &self.books)?;
        debug!(count = self.books.len(), path = %path.display(), "saved shelf as text");
        Ok(())
    }

    /// Load delimited text, **appending** to the current shelf.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound`, `Io`, or `TextParse` on failure; the shelf
    /// is unchanged on error.
    pub fn load_text(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let loaded = format::text::load(path)?;
        debug!(count = loaded.len(), path = %path.display(), "loaded text into shelf");
        self.books.extend(loaded);
        Ok(())
    }

    /// Save the shelf as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns `Io` or `Json` on failure.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        format::json::save(path, &self.books)?;
        debug!(count = self.books.len(), path = %path.display(), "saved shelf as JSON");
        Ok(())
    }

    /// Load a JSON array, **replacing** the current shelf.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound`, `Io`, or `Json` on failure; the shelf is
    /// unchanged on error.
    pub fn load_json(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let loaded = format::json::load(path)?;
        debug!(count = loaded.len(), path = %path.display(), "loaded JSON shelf");
        self.books = loaded;
        Ok(())
    }

    /// Save the shelf as CSV.
    ///
    /// # Errors
    ///
    /// Returns `Io` or `Csv` on failure.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        format::csv::save(path, &self.books)?;
        debug!(count = self.books.len(), path = %path.display(), "saved shelf as CSV");
        Ok(())
    }

    /// Load CSV, **appending** to the current shelf.
    ///
    /// Text and CSV loads append; JSON and binary loads replace.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound`, `Io`, or `Csv` on failure; the shelf is
    /// unchanged on error.
    pub fn load_csv(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let loaded = format::csv::load(path)?;
        debug!(count = loaded.len(), path = %path.display(), "loaded CSV into shelf");
        self.books.extend(loaded);
        Ok(())
    }

    /// Save the shelf as a binary snapshot.
    ///
    /// # Errors
    ///
    /// Returns `Io` on write failure.
    pub fn save_binary(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        format::binary::save(path, &self.books)?;
        debug!(count = self.books.len(), path = %path.display(), "saved shelf snapshot");
        Ok(())
    }

    /// Load a binary snapshot, **replacing** the current shelf.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound`, `Io`, or `BinaryDecode` on failure; the
    /// shelf is unchanged on error.
    pub fn load_binary(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let loaded = format::binary::load(path)?;
        debug!(count = loaded.len(), path = %path.display(), "loaded shelf snapshot");
        self.books = loaded;
        Ok(())
    }

    /// Back up the shelf in the named format.
    ///
    /// `format` must be `"json"` or `"binary"` (case-insensitive). The
    /// format string is validated before anything touches the filesystem,
    /// so an unknown format never creates a file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for an unknown format string, or the
    /// underlying save error.
    pub fn backup(&self, path: impl AsRef<Path>, format: &str) -> Result<()> {
        match format.parse::<BackupFormat>()? {
            BackupFormat::Json => self.save_json(path),
            BackupFormat::Binary => self.save_binary(path),
        }
    }
}
