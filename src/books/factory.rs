use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::{StoreError, StoreResult};
use crate::core::repository::RepositoryStore;

pub fn create_book_repository(config: &Configuration, store: RepositoryStore) -> StoreResult<Box<dyn BookRepository>> {
    match store {
        RepositoryStore::Sample => {
            Ok(Box::new(MemoryBookRepository::sample()))
        }
        RepositoryStore::JsonFile => {
            let path = config.catalog_path.as_deref().ok_or_else(|| StoreError::validation(
                format!("no catalog path configured for branch {}", config.branch_id).as_str(),
                Some("catalog_path".to_string())))?;
            Ok(Box::new(MemoryBookRepository::from_json_file(path)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::factory::create_book_repository;
    use crate::books::repository::BookRepository;
    use crate::core::domain::Configuration;
    use crate::core::library::StoreError;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_create_sample_repository() {
        let repo = create_book_repository(&Configuration::new("test"), RepositoryStore::Sample)
            .expect("should create repository");
        let res = repo.find_by_title_or_author("Fowler").expect("should return books");
        assert_eq!(1, res.len());
    }

    #[test]
    fn test_should_reject_json_store_without_path() {
        let res = create_book_repository(&Configuration::new("test"), RepositoryStore::JsonFile);
        assert!(matches!(res, Err(StoreError::Validation { .. })));
    }
}
