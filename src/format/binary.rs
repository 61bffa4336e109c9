//! Binary snapshot codec for shelf files.
//!
//! Explicit length-prefixed layout, little-endian:
//!
//! ```text
//! magic "ESTB" | version u8 | count u32
//! per book: title len u32 + UTF-8 | author len u32 + UTF-8
//!           | year i32 | genre len u32 + UTF-8
//! ```
//!
//! The format is private to this crate and version. The version byte is
//! checked on load; there is no cross-version or cross-implementation
//! compatibility guarantee.

use std::fs;
use std::path::Path;

use crate::error::{EstanteError, Result};
use crate::model::Book;

/// Magic bytes for shelf snapshot files.
const MAGIC: [u8; 4] = *b"ESTB";

/// Current snapshot format version.
const VERSION: u8 = 1;

/// Save books as a binary snapshot with atomic write.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written.
#[allow(clippy::cast_possible_truncation)]
pub fn save(path: &Path, books: &[Book]) -> Result<()> {
    let mut buf = Vec::with_capacity(16 + books.len() * 64);
    buf.extend_from_slice(&MAGIC);
    buf.push(VERSION);
    buf.extend_from_slice(&(books.len() as u32).to_le_bytes());

    for book in books {
        write_str(&mut buf, &book.title);
        write_str(&mut buf, &book.author);
        buf.extend_from_slice(&book.year.to_le_bytes());
        write_str(&mut buf, &book.genre);
    }

    let tmp_path = path.with_extension("bin.tmp");
    fs::write(&tmp_path, &buf)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

/// Load books from a binary snapshot.
///
/// # Errors
///
/// Returns `FileNotFound` if the path does not exist, `Io` on read failure,
/// or `BinaryDecode` on bad magic, an unsupported version, truncation, or
/// invalid UTF-8 in a string field.
pub fn load(path: &Path) -> Result<Vec<Book>> {
    let buf = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EstanteError::FileNotFound(path.to_path_buf())
        } else {
            EstanteError::Io(e)
        }
    })?;

    let mut cursor = Cursor::new(&buf);

    if cursor.take(4)? != MAGIC.as_slice() {
        return Err(EstanteError::binary_decode("bad magic"));
    }
    let version = cursor.take(1)?[0];
    if version != VERSION {
        return Err(EstanteError::binary_decode(format!(
            "unsupported snapshot version {version}"
        )));
    }

    let count = cursor.read_u32()?;
    let mut books = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let title = cursor.read_string()?;
        let author = cursor.read_string()?;
        let year = cursor.read_i32()?;
        let genre = cursor.read_string()?;
        books.push(Book::new(title, author, year, genre));
    }

    Ok(books)
}

#[allow(clippy::cast_possible_truncation)]
fn write_str(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
}

/// Bounds-checked reader over the snapshot bytes.
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.buf.len())
            .ok_or_else(|| EstanteError::binary_decode("truncated snapshot"))?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.take(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_u32()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|_| EstanteError::binary_decode("invalid UTF-8 in string field"))
    }
}
