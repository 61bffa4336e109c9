//! CSV codec for shelf files.
//!
//! A header row with the four field names, then one row per book in field
//! order. Loading maps columns by header name, so column order in the file
//! does not matter.

use std::fs;
use std::path::Path;

use crate::error::{EstanteError, Result};
use crate::model::Book;

/// Column headers, in field order.
const HEADERS: [&str; 4] = ["title", "author", "year", "genre"];

/// Save books as CSV with atomic write.
///
/// The header row is written even for an empty shelf.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written, or `Csv` on encoding
/// failure.
pub fn save(path: &Path, books: &[Book]) -> Result<()> {
    let tmp_path = path.with_extension("csv.tmp");
    let file = fs::File::create(&tmp_path)?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(HEADERS)?;
    for book in books {
        let year = book.year.to_string();
        writer.write_record([
            book.title.as_str(),
            book.author.as_str(),
            year.as_str(),
            book.genre.as_str(),
        ])?;
    }

    writer.flush()?;
    drop(writer);

    fs::rename(&tmp_path, path)?;

    Ok(())
}

/// Load books from a CSV file by header-mapped columns.
///
/// # Errors
///
/// Returns `FileNotFound` if the path does not exist, `Io` on read failure,
/// or `Csv` if a row cannot be decoded into a book.
pub fn load(path: &Path) -> Result<Vec<Book>> {
    let file = fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EstanteError::FileNotFound(path.to_path_buf())
        } else {
            EstanteError::Io(e)
        }
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut books = Vec::new();
    for record in reader.deserialize() {
        let book: Book = record?;
        books.push(book);
    }

    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_books() -> Vec<Book> {
        vec![
            Book::new("1984", "George Orwell", 1949, "Ficção"),
            Book::new("Cem Anos de Solidão", "Gabriel Garcia Marquez", 1967, "Realismo Mágico"),
        ]
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("livros.csv");

        let books = sample_books();
        save(&path, &books).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, books);
    }

    #[test]
    fn test_header_row_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("livros.csv");

        save(&path, &sample_books()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("title,author,year,genre\n"));
    }

    #[test]
    fn test_empty_shelf_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        save(&path, &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "title,author,year,genre\n");
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_maps_by_header_not_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reordered.csv");
        fs::write(
            &path,
            "author,genre,title,year\nGeorge Orwell,Ficção,1984,1949\n",
        )
        .unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(
            loaded,
            vec![Book::new("1984", "George Orwell", 1949, "Ficção")]
        );
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("/nonexistent/livros.csv"));
        assert!(matches!(result, Err(EstanteError::FileNotFound(_))));
    }

    #[test]
    fn test_load_bad_year_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(
            &path,
            "title,author,year,genre\n1984,George Orwell,not-a-year,Ficção\n",
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, EstanteError::Csv(_)));
    }

    #[test]
    fn test_quoted_fields_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quoted.csv");

        // Unlike the delimited-text codec, CSV quoting keeps embedded
        // commas intact.
        let books = vec![Book::new(
            "O Senhor dos Anéis, Volume I",
            "J.R.R. Tolkien",
            1954,
            "Fantasia",
        )];
        save(&path, &books).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, books);
    }
}
