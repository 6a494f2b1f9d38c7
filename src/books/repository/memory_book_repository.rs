use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::books::domain::model::Book;
use crate::books::repository::BookRepository;
use crate::core::library::StoreResult;

lazy_static! {
    static ref SAMPLE_BOOKS: Vec<Book> = vec![
        Book::new(1, "ISBN 12312-31231", "D. Knuth", "Art Of Programming",
                  "Fundamental algorithms, volume one of the series.", Decimal::new(719, 2)),
        Book::new(2, "ISBN 12312-31232", "M. Fowler", "Refactoring",
                  "Improving the design of existing code.", Decimal::new(1245, 2)),
        Book::new(3, "ISBN 12312-31233", "B. Kernighan, D. Ritchie", "C Programming Language",
                  "The classic introduction to C.", Decimal::new(1498, 2)),
    ];
}

// MemoryBookRepository serves lookups from a catalog held in memory. It never
// writes back; the catalog is fixed when the repository is built.
#[derive(Debug, Clone)]
pub struct MemoryBookRepository {
    books: Vec<Book>,
}

impl MemoryBookRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
        }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_BOOKS.clone())
    }

    /// Loads a catalog from a JSON array of books.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        let books: Vec<Book> = serde_json::from_str(json.as_str())?;
        info!(path = %path.as_ref().display(), books = books.len(), "loaded catalog");
        Ok(Self::new(books))
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_by_isbn(&self, isbn: &str) -> StoreResult<Vec<Book>> {
        let books: Vec<Book> = self.books.iter()
            .filter(|book| book.isbn() == isbn)
            .cloned()
            .collect();
        debug!(isbn, found = books.len(), "isbn lookup");
        Ok(books)
    }

    fn find_by_title_or_author(&self, query: &str) -> StoreResult<Vec<Book>> {
        let books: Vec<Book> = self.books.iter()
            .filter(|book| book.author().contains(query) || book.title().contains(query))
            .cloned()
            .collect();
        debug!(query, found = books.len(), "title or author lookup");
        Ok(books)
    }
}
