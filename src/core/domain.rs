use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for the bookstore
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub catalog_path: Option<String>,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            catalog_path: None,
        }
    }

    pub fn with_catalog_path(mut self, catalog_path: &str) -> Self {
        self.catalog_path = Some(catalog_path.to_string());
        self
    }

    pub fn store(&self) -> RepositoryStore {
        if self.catalog_path.is_some() {
            RepositoryStore::JsonFile
        } else {
            RepositoryStore::Sample
        }
    }
}
