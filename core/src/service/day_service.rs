use crate::action::{reduce, Action, Applied};
use crate::error::LifeTrackError;
use crate::model::DayRecord;
use crate::repository::StoreRepository;
use crate::store::Store;
use crate::time::check_date_key;
use anyhow::Result;
use log::{error, info};

/// Owns the in-memory store and writes it back through the repository after
/// every successful change. A change whose save fails is rolled back, so the
/// store always matches what was last written.
pub struct DayService<R: StoreRepository> {
    repo: R,
    store: Store,
}

impl<R: StoreRepository> DayService<R> {
    pub fn new(repo: R) -> Result<Self> {
        let store = repo.load()?;
        info!("event=service_init module=day_service days={}", store.len());
        Ok(Self { repo, store })
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn day(&self, date: &str) -> DayRecord {
        self.store.get(date)
    }

    pub fn has_data(&self, date: &str) -> bool {
        self.store.day_has_data(date)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Applied> {
        let snapshot = self.store.clone();
        let applied = reduce(&mut self.store, action)?;
        self.persist(snapshot)?;
        Ok(applied)
    }

    /// Runs a form-level change against one day, e.g. a `ListEditor`
    /// submit. Nothing is written if `f` fails.
    pub fn update_day<T, F>(&mut self, date: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut DayRecord) -> std::result::Result<T, LifeTrackError>,
    {
        check_date_key(date)?;
        let snapshot = self.store.clone();
        let out = self.store.with_day_record(date, f)?;
        self.persist(snapshot)?;
        Ok(out)
    }

    fn persist(&mut self, snapshot: Store) -> Result<()> {
        if let Err(err) = self.repo.save(&self.store) {
            error!("event=store_save status=error rollback=true error={:#}", err);
            self.store = snapshot;
            return Err(err);
        }
        Ok(())
    }
}
