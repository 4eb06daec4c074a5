use std::cell::RefCell;

use anyhow::Result;

use crate::repository::traits::StoreRepository;
use crate::store::Store;

/// Keeps the store for the lifetime of the process only.
#[derive(Default)]
pub struct MemoryStoreRepository {
    store: RefCell<Store>,
}

impl MemoryStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: Store) -> Self {
        Self {
            store: RefCell::new(store),
        }
    }
}

impl StoreRepository for MemoryStoreRepository {
    fn load(&self) -> Result<Store> {
        Ok(self.store.borrow().clone())
    }

    fn save(&self, store: &Store) -> Result<()> {
        *self.store.borrow_mut() = store.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeTrackError;

    #[test]
    fn test_save_then_load() {
        let repo = MemoryStoreRepository::new();
        assert!(repo.load().unwrap().is_empty());

        let mut store = Store::new();
        store
            .with_day_record("2024-01-01", |r| {
                r.cigarette_count = "4".to_string();
                Ok::<_, LifeTrackError>(())
            })
            .unwrap();
        repo.save(&store).unwrap();
        assert_eq!(repo.load().unwrap(), store);
    }
}
