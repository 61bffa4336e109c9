//! `estante` — in-memory book shelf with multi-format persistence.
//!
//! An ordered collection of book records with add/search/filter/count
//! operations, persisted to delimited text, JSON, CSV, or a private binary
//! snapshot format. Single-threaded and synchronous by design.
//!
//! Load semantics differ by format: text and CSV loads **append** to the
//! in-memory shelf, JSON and binary loads **replace** it. See the method
//! docs on [`Library`].
//!
//! # Quick Start
//!
//! ```no_run
//! use estante::{Book, BookFilters, Library};
//!
//! let mut shelf = Library::new();
//! shelf.add(Book::new("O Hobbit", "J.R.R. Tolkien", 1937, "Fantasia"));
//!
//! // Query
//! let tolkien = shelf.find_by_author("J.R.R. Tolkien");
//! let fantasy = shelf.filter(&BookFilters {
//!     genre: Some("Fantasia".into()),
//!     ..Default::default()
//! });
//!
//! // Persist
//! shelf.save_json("livros.json").unwrap();
//! shelf.backup("backup.json", "json").unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod format;
pub mod library;
pub mod model;
pub mod query;

pub use error::{EstanteError, Result};
pub use format::BackupFormat;
pub use library::Library;
pub use model::Book;
pub use query::BookFilters;
