use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    Exercise, ExerciseID, ReadError, Routine, Set, SetID, StorageError, Workout, WorkoutID,
    catalog, estimated_calories, previous_performance,
};

const DEFAULT_TITLE: &str = "Sesión Táctica";
const DEFAULT_SETS_PER_EXERCISE: u32 = 3;

pub trait SessionRepository {
    fn read_session_draft(&self) -> Result<Option<SessionDraft>, ReadError>;
    fn write_session_draft(&self, draft: Option<&SessionDraft>) -> Result<(), StorageError>;
}

pub trait SessionService {
    fn get_session_draft(&self) -> Result<Option<SessionDraft>, ReadError>;
    fn store_session_draft(&self, draft: &SessionDraft) -> Result<(), StorageError>;
    fn clear_session_draft(&self) -> Result<(), StorageError>;
}

/// An in-progress workout. Persisted on every mutation so that a page reload
/// resumes where the athlete left off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDraft {
    pub title: String,
    pub exercises: Vec<Exercise>,
    pub seconds: u32,
}

impl Default for SessionDraft {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            exercises: vec![],
            seconds: 0,
        }
    }
}

impl SessionDraft {
    #[must_use]
    pub fn start(routine: Option<&Routine>) -> Self {
        let Some(routine) = routine else {
            return Self::default();
        };
        Self {
            title: routine.name.to_string(),
            exercises: routine
                .exercises
                .iter()
                .map(|e| {
                    let sets_count = if e.sets_count == 0 {
                        DEFAULT_SETS_PER_EXERCISE
                    } else {
                        e.sets_count
                    };
                    let entry = catalog::entry(&e.name);
                    Exercise {
                        id: ExerciseID::new(),
                        name: e.name.clone(),
                        sets: (0..sets_count).map(|_| Set::empty()).collect(),
                        exercise_type: entry.map(|entry| entry.exercise_type),
                        met_value: entry.map(|entry| entry.met),
                    }
                })
                .collect(),
            seconds: 0,
        }
    }

    /// Adds an exercise, seeding its sets from the newest prior performance of
    /// the same exercise in the archive. Without one, a single zeroed set.
    pub fn add_exercise_from_catalog(&mut self, entry: &catalog::Entry, history: &[Workout]) {
        let sets = previous_performance(history, entry.name).map_or_else(
            || vec![Set::empty()],
            |previous| {
                previous
                    .sets
                    .iter()
                    .map(|s| Set {
                        id: SetID::new(),
                        weight: s.weight,
                        reps: s.reps,
                        completed: false,
                    })
                    .collect()
            },
        );
        self.exercises.push(Exercise {
            id: ExerciseID::new(),
            name: entry.name.to_string(),
            sets,
            exercise_type: Some(entry.exercise_type),
            met_value: Some(entry.met),
        });
    }

    /// Appends a set pre-filled with the last set's load, uncompleted.
    pub fn add_set(&mut self, exercise_id: ExerciseID) {
        let Some(exercise) = self.exercise_mut(exercise_id) else {
            return;
        };
        let set = exercise.sets.last().map_or_else(Set::empty, |last| Set {
            id: SetID::new(),
            weight: last.weight,
            reps: last.reps,
            completed: false,
        });
        exercise.sets.push(set);
    }

    pub fn update_set(&mut self, exercise_id: ExerciseID, set_id: SetID, update: SetUpdate) {
        let Some(set) = self.set_mut(exercise_id, set_id) else {
            return;
        };
        if let Some(weight) = update.weight {
            set.weight = weight;
        }
        if let Some(reps) = update.reps {
            set.reps = reps;
        }
    }

    pub fn toggle_set_completed(&mut self, exercise_id: ExerciseID, set_id: SetID) {
        if let Some(set) = self.set_mut(exercise_id, set_id) {
            set.completed = !set.completed;
        }
    }

    pub fn remove_exercise(&mut self, exercise_id: ExerciseID) {
        self.exercises.retain(|e| e.id != exercise_id);
    }

    /// Advances the elapsed time by one second.
    pub fn tick(&mut self) {
        self.seconds += 1;
    }

    /// Turns the draft into an archivable workout, freezing the calorie total.
    pub fn finish(&self, now: DateTime<Utc>) -> Result<Workout, SaveError> {
        if self.exercises.is_empty() {
            return Err(SaveError::NoExercises);
        }
        Ok(Workout {
            id: WorkoutID::new(),
            date: now,
            title: self.title.clone(),
            exercises: self.exercises.clone(),
            calories_burned: estimated_calories(&self.exercises),
            duration: self.seconds,
        })
    }

    fn exercise_mut(&mut self, exercise_id: ExerciseID) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|e| e.id == exercise_id)
    }

    fn set_mut(&mut self, exercise_id: ExerciseID, set_id: SetID) -> Option<&mut Set> {
        self.exercise_mut(exercise_id)?
            .sets
            .iter_mut()
            .find(|s| s.id == set_id)
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct SetUpdate {
    pub weight: Option<f64>,
    pub reps: Option<u32>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SaveError {
    #[error("a workout must contain at least one exercise")]
    NoExercises,
}
