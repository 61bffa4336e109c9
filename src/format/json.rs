//! JSON codec for shelf files.
//!
//! The whole shelf is stored as one JSON array of objects with the keys
//! `title`, `author`, `year`, `genre`.

use std::fs;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::error::{EstanteError, Result};
use crate::model::Book;

/// Save books as a JSON array with atomic write.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written, or `Json` on
/// serialization failure.
pub fn save(path: &Path, books: &[Book]) -> Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&tmp_path)?;

    serde_json::to_writer(&mut file, books)?;

    file.flush()?;
    drop(file);

    fs::rename(&tmp_path, path)?;

    Ok(())
}

/// Load books from a JSON array file.
///
/// # Errors
///
/// Returns `FileNotFound` if the path does not exist, `Io` on read failure,
/// or `Json` if the contents are not a valid book array.
pub fn load(path: &Path) -> Result<Vec<Book>> {
    let file = fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EstanteError::FileNotFound(path.to_path_buf())
        } else {
            EstanteError::Io(e)
        }
    })?;
    let reader = BufReader::new(file);

    let books: Vec<Book> = serde_json::from_reader(reader)?;
    Ok(books)
}
