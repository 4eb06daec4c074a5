use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde_json;

use crate::repository::traits::StoreRepository;
use crate::store::Store;

const DEFAULT_FILE_NAME: &str = "days.json";
pub const DEFAULT_DIR_NAME: &str = ".lifetrack";

/// `~/.lifetrack`
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DEFAULT_DIR_NAME))
}

/// Stores the whole date map as one pretty-printed JSON object.
#[derive(Clone)]
pub struct FileStoreRepository {
    file_path: PathBuf,
}

impl FileStoreRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&path)
            .with_context(|| format!("Could not create data directory {}", path.display()))?;
        path.push(DEFAULT_FILE_NAME);

        let repo = FileStoreRepository { file_path: path };
        if !repo.file_path.exists() {
            repo.write_store(&Store::new())?;
            info!("event=store_file_created path={}", repo.file_path.display());
        }
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn write_store(&self, store: &Store) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, store)?;
        writer.flush()?;
        Ok(())
    }
}

impl StoreRepository for FileStoreRepository {
    fn load(&self) -> Result<Store> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let store: Store = serde_json::from_reader(reader)
            .with_context(|| format!("Malformed store file {}", self.file_path.display()))?;
        debug!("event=store_loaded days={} path={}", store.len(), self.file_path.display());
        Ok(store)
    }

    fn save(&self, store: &Store) -> Result<()> {
        self.write_store(store)?;
        debug!("event=store_saved days={} path={}", store.len(), self.file_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{reduce, Action};
    use crate::model::{ExerciseEntry, StudySession};

    #[test]
    fn test_new_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStoreRepository::new(Some(dir.path().join("nested"))).unwrap();
        assert!(repo.path().exists());
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStoreRepository::new(Some(dir.path().to_path_buf())).unwrap();

        let mut store = Store::new();
        reduce(
            &mut store,
            Action::AddExercise {
                date: "2024-04-01".into(),
                entry: ExerciseEntry::new("Pull-up", "0", "3", "10", "Back"),
            },
        )
        .unwrap();
        reduce(
            &mut store,
            Action::AddStudy {
                date: "2024-04-02".into(),
                entry: StudySession::new("Chemistry", "25", "2"),
            },
        )
        .unwrap();
        repo.save(&store).unwrap();

        let reopened = FileStoreRepository::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(reopened.load().unwrap(), store);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStoreRepository::new(Some(dir.path().to_path_buf())).unwrap();
        fs::write(repo.path(), "[1, 2, 3]").unwrap();
        assert!(repo.load().is_err());
    }
}
