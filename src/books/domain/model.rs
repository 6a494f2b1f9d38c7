use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// Book is an immutable catalog record. Repositories build a fresh copy per lookup,
// so callers only ever read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    id: i64,
    isbn: String,
    author: String,
    title: String,
    description: String,
    price: Decimal,
}

impl Book {
    pub fn new(id: i64, isbn: &str, author: &str, title: &str, description: &str, price: Decimal) -> Self {
        Self {
            id,
            isbn: isbn.to_string(),
            author: author.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            price,
        }
    }

    pub fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl Identifiable for Book {
    fn id(&self) -> i64 {
        self.id
    }
}
