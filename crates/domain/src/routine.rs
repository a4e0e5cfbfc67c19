use derive_more::Deref;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CreateError, DeleteError, ExerciseID, Name, ReadError, UpdateError};

pub trait RoutineRepository {
    fn read_routines(&self) -> Result<Vec<Routine>, ReadError>;
    fn create_routine(&self, routine: Routine) -> Result<Routine, CreateError>;
    fn replace_routine(&self, routine: Routine) -> Result<Routine, UpdateError>;
    fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError>;
}

pub trait RoutineService {
    fn get_routines(&self) -> Result<Vec<Routine>, ReadError>;
    fn add_routine(&self, routine: Routine) -> Result<Routine, CreateError>;
    fn modify_routine(&self, routine: Routine) -> Result<Routine, UpdateError>;
    fn remove_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError>;
}

/// A reusable workout template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub id: RoutineID,
    pub name: Name,
    pub exercises: Vec<RoutineExercise>,
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoutineID(Uuid);

impl RoutineID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for RoutineID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for RoutineID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// An exercise slot within a routine. Carries a planned set count only,
/// weights and reps are filled in during the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineExercise {
    pub id: ExerciseID,
    pub name: String,
    #[serde(rename = "setsCount")]
    pub sets_count: u32,
}
