pub mod service;

use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::core::library::StoreResult;

// Marker that routes a query to the isbn lookup. Matched as a plain, case-sensitive
// substring; the rest of the query is not inspected.
pub const ISBN_MARKER: &str = "ISBN";

pub trait CatalogService: Sync + Send {
    // routes the query to exactly one repository lookup and returns its books unchanged
    fn dispatch(&self, query: &str) -> StoreResult<Vec<Book>>;
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum QueryKind {
    Isbn,
    TitleOrAuthor,
}

impl QueryKind {
    pub fn classify(query: &str) -> QueryKind {
        if query.contains(ISBN_MARKER) {
            QueryKind::Isbn
        } else {
            QueryKind::TitleOrAuthor
        }
    }
}

impl Display for QueryKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            QueryKind::Isbn => write!(f, "Isbn"),
            QueryKind::TitleOrAuthor => write!(f, "TitleOrAuthor"),
        }
    }
}
