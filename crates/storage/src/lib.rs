//! Snapshot persistence for the client state.
//!
//! Every collection is stored as one JSON document under a fixed key. Reads
//! of missing or corrupt documents fall back to the empty state so that a
//! damaged store never takes the whole client down.

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

#[cfg(target_arch = "wasm32")]
mod browser;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;
pub use memory::MemoryStore;

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::AsRefStr;

use bloomfit_domain::{
    CreateError, DeleteError, ReadError, Routine, RoutineID, RoutineRepository, SessionDraft,
    SessionRepository, StorageError, UpdateError, Workout, WorkoutRepository,
};

/// A string-keyed document store. The browser implementation is backed by
/// local storage; tests use an in-memory map.
pub trait DocumentStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, document: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    #[strum(serialize = "bloomfit_data_v2")]
    Workouts,
    #[strum(serialize = "bloomfit_routines_v1")]
    Routines,
    #[strum(serialize = "bloom_active_session_v1")]
    SessionDraft,
}

pub struct SnapshotStorage<S> {
    store: S,
}

impl<S: DocumentStore> SnapshotStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, key: Key) -> Result<T, ReadError> {
        let Some(document) = self.store.read(key.as_ref())? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&document) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!("discarding corrupt document {}: {err}", key.as_ref());
                Ok(T::default())
            }
        }
    }

    fn write_document<T: Serialize>(&self, key: Key, value: &T) -> Result<(), StorageError> {
        let document = serde_json::to_string(value)
            .map_err(|err| StorageError::Other(Box::new(err)))?;
        self.store.write(key.as_ref(), &document)
    }
}

impl<S: DocumentStore> WorkoutRepository for SnapshotStorage<S> {
    fn read_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        self.read_or_default(Key::Workouts)
    }

    fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
        let mut workouts: Vec<Workout> = self.read_or_default(Key::Workouts)?;
        workouts.push(workout.clone());
        self.write_document(Key::Workouts, &workouts)?;
        Ok(workout)
    }
}

impl<S: DocumentStore> RoutineRepository for SnapshotStorage<S> {
    fn read_routines(&self) -> Result<Vec<Routine>, ReadError> {
        self.read_or_default(Key::Routines)
    }

    fn create_routine(&self, routine: Routine) -> Result<Routine, CreateError> {
        let mut routines: Vec<Routine> = self.read_or_default(Key::Routines)?;
        routines.push(routine.clone());
        self.write_document(Key::Routines, &routines)?;
        Ok(routine)
    }

    fn replace_routine(&self, routine: Routine) -> Result<Routine, UpdateError> {
        let mut routines: Vec<Routine> = self.read_or_default(Key::Routines)?;
        let existing = routines
            .iter_mut()
            .find(|r| r.id == routine.id)
            .ok_or(UpdateError::NotFound)?;
        *existing = routine.clone();
        self.write_document(Key::Routines, &routines)?;
        Ok(routine)
    }

    fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError> {
        let mut routines: Vec<Routine> = self.read_or_default(Key::Routines)?;
        routines.retain(|r| r.id != id);
        self.write_document(Key::Routines, &routines)?;
        Ok(id)
    }
}

impl<S: DocumentStore> SessionRepository for SnapshotStorage<S> {
    fn read_session_draft(&self) -> Result<Option<SessionDraft>, ReadError> {
        let Some(document) = self.store.read(Key::SessionDraft.as_ref())? else {
            return Ok(None);
        };
        match serde_json::from_str(&document) {
            Ok(draft) => Ok(Some(draft)),
            Err(err) => {
                warn!(
                    "discarding corrupt document {}: {err}",
                    Key::SessionDraft.as_ref()
                );
                Ok(None)
            }
        }
    }

    fn write_session_draft(&self, draft: Option<&SessionDraft>) -> Result<(), StorageError> {
        match draft {
            Some(draft) => self.write_document(Key::SessionDraft, draft),
            None => self.store.remove(Key::SessionDraft.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use bloomfit_domain::{Exercise, Name, RoutineExercise, Set};

    use super::*;

    fn workout(id: u128, title: &str) -> Workout {
        Workout {
            id: id.into(),
            date: Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap(),
            title: title.to_string(),
            exercises: vec![Exercise {
                id: id.into(),
                name: "Rucking".to_string(),
                sets: vec![Set {
                    id: id.into(),
                    weight: 10.0,
                    reps: 1,
                    completed: true,
                }],
                exercise_type: None,
                met_value: Some(8.5),
            }],
            calories_burned: 32,
            duration: 3600,
        }
    }

    fn routine(id: u128, name: &str) -> Routine {
        Routine {
            id: id.into(),
            name: Name::new(name).unwrap(),
            exercises: vec![RoutineExercise {
                id: id.into(),
                name: "Sentadilla Hack".to_string(),
                sets_count: 4,
            }],
        }
    }

    #[fixture]
    fn storage() -> SnapshotStorage<MemoryStore> {
        SnapshotStorage::new(MemoryStore::default())
    }

    #[rstest]
    fn test_workouts_append_in_order(storage: SnapshotStorage<MemoryStore>) {
        assert_eq!(storage.read_workouts().unwrap(), vec![]);

        storage.create_workout(workout(1, "A")).unwrap();
        storage.create_workout(workout(2, "B")).unwrap();
        storage.create_workout(workout(3, "C")).unwrap();

        assert_eq!(
            storage
                .read_workouts()
                .unwrap()
                .iter()
                .map(|w| w.title.clone())
                .collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
    }

    #[rstest]
    fn test_corrupt_workout_document_reads_as_empty(storage: SnapshotStorage<MemoryStore>) {
        storage
            .store
            .write("bloomfit_data_v2", "{not json")
            .unwrap();
        assert_eq!(storage.read_workouts().unwrap(), vec![]);

        // A subsequent append starts a fresh snapshot.
        storage.create_workout(workout(1, "A")).unwrap();
        assert_eq!(storage.read_workouts().unwrap().len(), 1);
    }

    #[rstest]
    fn test_replace_routine(storage: SnapshotStorage<MemoryStore>) {
        storage.create_routine(routine(1, "Empuje")).unwrap();
        storage.create_routine(routine(2, "Tirón")).unwrap();
        storage.create_routine(routine(3, "Pierna")).unwrap();

        let mut updated = routine(2, "Tirón Pesado");
        updated.exercises[0].sets_count = 5;
        storage.replace_routine(updated.clone()).unwrap();

        let routines = storage.read_routines().unwrap();
        assert_eq!(
            routines.iter().map(|r| r.name.to_string()).collect::<Vec<_>>(),
            vec!["Empuje", "Tirón Pesado", "Pierna"]
        );
        assert_eq!(routines[1], updated);
    }

    #[rstest]
    fn test_replace_unknown_routine_leaves_catalog_unchanged(
        storage: SnapshotStorage<MemoryStore>,
    ) {
        storage.create_routine(routine(1, "Empuje")).unwrap();

        assert!(matches!(
            storage.replace_routine(routine(2, "Fantasma")),
            Err(UpdateError::NotFound)
        ));
        assert_eq!(storage.read_routines().unwrap(), vec![routine(1, "Empuje")]);
    }

    #[rstest]
    fn test_delete_routine_is_idempotent(storage: SnapshotStorage<MemoryStore>) {
        storage.create_routine(routine(1, "Empuje")).unwrap();

        assert_eq!(storage.delete_routine(1.into()).unwrap(), RoutineID::from(1));
        assert_eq!(storage.read_routines().unwrap(), vec![]);
        assert!(storage.delete_routine(1.into()).is_ok());
    }

    #[rstest]
    fn test_session_draft_round_trip_and_clear(storage: SnapshotStorage<MemoryStore>) {
        assert_eq!(storage.read_session_draft().unwrap(), None);

        let mut draft = SessionDraft::default();
        draft.tick();
        storage.write_session_draft(Some(&draft)).unwrap();
        assert_eq!(storage.read_session_draft().unwrap(), Some(draft));

        storage.write_session_draft(None).unwrap();
        assert_eq!(storage.read_session_draft().unwrap(), None);
    }

    #[rstest]
    fn test_corrupt_session_draft_reads_as_none(storage: SnapshotStorage<MemoryStore>) {
        storage
            .store
            .write("bloom_active_session_v1", "[1, 2")
            .unwrap();
        assert_eq!(storage.read_session_draft().unwrap(), None);
    }

    #[test]
    fn test_document_keys() {
        assert_eq!(Key::Workouts.as_ref(), "bloomfit_data_v2");
        assert_eq!(Key::Routines.as_ref(), "bloomfit_routines_v1");
        assert_eq!(Key::SessionDraft.as_ref(), "bloom_active_session_v1");
    }
}
