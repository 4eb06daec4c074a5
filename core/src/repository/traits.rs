use crate::store::Store;
use anyhow::Result;

/// Persistence boundary for the whole store.
pub trait StoreRepository {
    fn load(&self) -> Result<Store>;
    fn save(&self, store: &Store) -> Result<()>;
}

impl<R: StoreRepository + ?Sized> StoreRepository for Box<R> {
    fn load(&self) -> Result<Store> {
        (**self).load()
    }

    fn save(&self, store: &Store) -> Result<()> {
        (**self).save(store)
    }
}
