#[cfg(test)]
mod tests {
    use crate::action::{Action, Applied};
    use crate::editor::ListEditor;
    use crate::error::LifeTrackError;
    use crate::model::{ExerciseEntry, ListEntry, StudySession};
    use crate::repository::{MemoryStoreRepository, StoreRepository};
    use crate::service::day_service::DayService;
    use crate::store::Store;
    use anyhow::{anyhow, Result};
    use std::cell::Cell;

    struct CountingRepo {
        saves: Cell<usize>,
    }

    impl StoreRepository for CountingRepo {
        fn load(&self) -> Result<Store> { Ok(Store::new()) }
        fn save(&self, _store: &Store) -> Result<()> {
            self.saves.set(self.saves.get() + 1);
            Ok(())
        }
    }

    struct BrokenRepo;
    impl StoreRepository for BrokenRepo {
        fn load(&self) -> Result<Store> { Ok(Store::new()) }
        fn save(&self, _store: &Store) -> Result<()> { Err(anyhow!("disk full")) }
    }

    const DAY: &str = "2025-02-14";

    #[test]
    fn test_only_successful_actions_are_saved() {
        let repo = CountingRepo { saves: Cell::new(0) };
        let mut service = DayService::new(repo).unwrap();

        service
            .dispatch(Action::SaveWater { date: DAY.into(), liters: "2".into() })
            .unwrap();
        let err = service
            .dispatch(Action::AddStudy { date: DAY.into(), entry: StudySession::new("", "1", "1") })
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LifeTrackError>(),
            Some(LifeTrackError::MissingFields { .. })
        ));

        assert_eq!(service.repo_saves(), 1);
        assert!(service.has_data(DAY));
        assert!(service.day(DAY).study.is_empty());
    }

    #[test]
    fn test_update_day_with_list_editor() {
        let mut service = DayService::new(MemoryStoreRepository::new()).unwrap();
        let mut editor = ListEditor::<ExerciseEntry>::new();
        editor.draft = ExerciseEntry::new("Lunge", "20", "3", "12", "Legs");

        service
            .update_day(DAY, |r| editor.submit(ExerciseEntry::list_mut(r)))
            .unwrap();
        assert_eq!(service.day(DAY).exercises.len(), 1);

        // Empty draft: rejected, nothing materialized for another day.
        assert!(service
            .update_day("2025-02-15", |r| editor.submit(ExerciseEntry::list_mut(r)))
            .is_err());
        assert!(service.store().record("2025-02-15").is_none());
    }

    #[test]
    fn test_save_failure_rolls_back() {
        let mut service = DayService::new(BrokenRepo).unwrap();
        let res = service.dispatch(Action::SaveCigarettes { date: DAY.into(), count: "1".into() });
        assert!(res.is_err());
        assert_eq!(service.day(DAY).cigarette_count, "");
        assert!(!service.has_data(DAY));
        assert!(service.store().is_empty());

        let mut editor = ListEditor::<StudySession>::new();
        editor.draft = StudySession::new("Physics", "10", "1");
        assert!(service
            .update_day(DAY, |r| editor.submit(StudySession::list_mut(r)))
            .is_err());
        assert!(service.store().record(DAY).is_none());
    }

    #[test]
    fn test_update_day_rejects_bad_date() {
        let mut service = DayService::new(MemoryStoreRepository::new()).unwrap();
        let err = service
            .update_day("2025-2-14", |r| {
                r.water_liters = "1".into();
                Ok::<_, LifeTrackError>(())
            })
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LifeTrackError>(),
            Some(LifeTrackError::InvalidDateKey(_))
        ));
        assert!(service.store().is_empty());
    }

    #[test]
    fn test_loads_existing_store() {
        let mut seeded = Store::new();
        crate::action::reduce(
            &mut seeded,
            Action::AddExercise { date: DAY.into(), entry: ExerciseEntry::new("Dip", "0", "3", "8", "Arms") },
        )
        .unwrap();
        let service = DayService::new(MemoryStoreRepository::with_store(seeded)).unwrap();
        assert_eq!(service.day(DAY).exercises[0].value.name, "Dip");
    }

    #[test]
    fn test_delete_by_id_through_service() {
        let mut service = DayService::new(MemoryStoreRepository::new()).unwrap();
        let id = match service
            .dispatch(Action::AddStudy { date: DAY.into(), entry: StudySession::new("Biology", "5", "0.5") })
            .unwrap()
        {
            Applied::Added(id) => id,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(
            service.dispatch(Action::DeleteStudy { date: DAY.into(), id }).unwrap(),
            Applied::Removed(id)
        );
        assert!(!service.has_data(DAY));
    }

    impl DayService<CountingRepo> {
        fn repo_saves(&self) -> usize {
            self.repo().saves.get()
        }
    }
}
