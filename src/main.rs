//! `estante` — example walkthrough of the shelf API.
//!
//! Builds the five-book sample shelf, runs the queries, saves every
//! supported format, reloads the text file, and writes a JSON backup.
//! Paths are fixed; there is no command-line surface.

use estante::{Book, BookFilters, Library};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut shelf = Library::new();

    shelf.add(Book::new("1984", "George Orwell", 1949, "Ficção"));
    shelf.add(Book::new(
        "Orgulho e Preconceito",
        "Jane Austen",
        1813,
        "Romance",
    ));
    shelf.add(Book::new(
        "O Senhor dos Anéis",
        "J.R.R. Tolkien",
        1954,
        "Fantasia",
    ));
    shelf.add(Book::new(
        "Cem Anos de Solidão",
        "Gabriel Garcia Marquez",
        1967,
        "Realismo Mágico",
    ));
    shelf.add(Book::new("O Hobbit", "J.R.R. Tolkien", 1937, "Fantasia"));

    println!("Livros de J.R.R. Tolkien:");
    for book in shelf.find_by_author("J.R.R. Tolkien") {
        println!("  {book}");
    }

    println!(
        "Total de livros de Fantasia: {}",
        shelf.count_by_genre("Fantasia")
    );

    shelf.save_text("livros.txt")?;
    shelf.save_json("livros.json")?;
    shelf.save_csv("livros.csv")?;
    shelf.save_binary("livros.bin")?;

    let mut imported = Library::new();
    imported.load_text("livros.txt")?;
    println!("Importação de texto:");
    for book in imported.books() {
        println!("  {book}");
    }

    let filters = BookFilters {
        min_year: Some(1950),
        genre: Some("Fantasia".to_string()),
    };
    println!("Livros após 1950 no gênero 'Fantasia':");
    for book in shelf.filter(&filters) {
        println!("  {book}");
    }

    shelf.backup("backup.json", "json")?;

    Ok(())
}
