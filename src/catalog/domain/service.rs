use tracing::debug;
use crate::books::domain::model::Book;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, QueryKind};
use crate::core::library::StoreResult;

pub struct QueryDispatcher {
    book_repository: Box<dyn BookRepository>,
}

impl QueryDispatcher {
    pub fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

impl CatalogService for QueryDispatcher {
    fn dispatch(&self, query: &str) -> StoreResult<Vec<Book>> {
        let kind = QueryKind::classify(query);
        debug!(query, %kind, "dispatching book query");
        match kind {
            QueryKind::Isbn => self.book_repository.find_by_isbn(query),
            QueryKind::TitleOrAuthor => self.book_repository.find_by_title_or_author(query),
        }
    }
}
