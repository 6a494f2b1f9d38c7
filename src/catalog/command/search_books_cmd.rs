use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::catalog::domain::{CatalogService, QueryKind};
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub query: String,
}

impl SearchBooksCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub query: String,
    pub kind: QueryKind,
    pub books: Vec<Book>,
}

impl SearchBooksCommandResponse {
    pub fn new(query: String, books: Vec<Book>) -> Self {
        let kind = QueryKind::classify(query.as_str());
        Self {
            query,
            kind,
            books,
        }
    }
}

impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        self.catalog_service.dispatch(req.query.as_str())
            .map_err(CommandError::from)
            .map(|books| SearchBooksCommandResponse::new(req.query, books))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::Book;
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::domain::{CatalogService, QueryKind};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::{Configuration, Identifiable};
    use crate::core::library::{StoreError, StoreResult};
    use crate::core::repository::RepositoryStore;

    struct FailingCatalogService;

    impl CatalogService for FailingCatalogService {
        fn dispatch(&self, _query: &str) -> StoreResult<Vec<Book>> {
            Err(StoreError::unavailable("catalog busy", None, true))
        }
    }

    fn sample_cmd() -> SearchBooksCommand {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Sample)
            .expect("should create catalog service");
        SearchBooksCommand::new(svc)
    }

    #[test]
    fn test_should_run_isbn_search() {
        let res = sample_cmd().execute(SearchBooksCommandRequest::new("ISBN 12312-31233"))
            .expect("should search books");
        assert_eq!(QueryKind::Isbn, res.kind);
        assert_eq!("ISBN 12312-31233", res.query.as_str());
        assert_eq!(vec![3], res.books.iter().map(|b| b.id()).collect::<Vec<i64>>());
    }

    #[test]
    fn test_should_run_title_or_author_search() {
        let res = sample_cmd().execute(SearchBooksCommandRequest::new("Fowler"))
            .expect("should search books");
        assert_eq!(QueryKind::TitleOrAuthor, res.kind);
        assert_eq!(1, res.books.len());
        assert_eq!("Refactoring", res.books[0].title());
    }

    #[test]
    fn test_should_serialize_response() {
        let res = sample_cmd().execute(SearchBooksCommandRequest::new("Knuth"))
            .expect("should search books");
        let json = serde_json::to_value(&res).expect("should serialize response");
        assert_eq!("TitleOrAuthor", json["kind"]);
        assert_eq!(1, json["books"][0]["id"]);
        assert_eq!("7.19", json["books"][0]["price"]);
    }

    #[test]
    fn test_should_map_service_error() {
        let cmd = SearchBooksCommand::new(Box::new(FailingCatalogService));
        let res = cmd.execute(SearchBooksCommandRequest::new("anything"));
        assert!(matches!(res, Err(CommandError::Runtime { retryable: true, .. })));
    }

    #[test]
    fn test_should_parse_request() {
        let req: SearchBooksCommandRequest = serde_json::from_str(r#"{"query": "ISBN 1"}"#)
            .expect("should parse request");
        assert_eq!("ISBN 1", req.query.as_str());
    }
}
