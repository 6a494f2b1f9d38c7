pub mod memory_book_repository;

use crate::books::domain::model::Book;
use crate::core::library::StoreResult;

// BookRepository is the read side of the catalog consumed by the query dispatcher.
// Both lookups return books in the order the backing store yields them.
pub trait BookRepository: Sync + Send {
    // books whose isbn matches the given value
    fn find_by_isbn(&self, isbn: &str) -> StoreResult<Vec<Book>>;

    // books whose title or author matches the given query
    fn find_by_title_or_author(&self, query: &str) -> StoreResult<Vec<Book>>;
}
