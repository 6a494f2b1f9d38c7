use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// RepositoryStore selects where a book repository reads its catalog from
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Sample,
    JsonFile,
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::Sample => write!(f, "Sample"),
            RepositoryStore::JsonFile => write!(f, "JsonFile"),
        }
    }
}
