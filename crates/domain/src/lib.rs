#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod error;
pub mod name;
pub mod routine;
pub mod service;
pub mod session;
pub mod statistics;
pub mod workout;

pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError};
pub use name::{Name, NameError};
pub use routine::{Routine, RoutineExercise, RoutineID, RoutineRepository, RoutineService};
pub use service::Service;
pub use session::{SaveError, SessionDraft, SessionRepository, SessionService, SetUpdate};
pub use statistics::{HistoryGroup, Summary, WeeklyPoint, history_groups, summary, weekly_series};
pub use workout::{
    Exercise, ExerciseID, ExerciseType, Set, SetID, Workout, WorkoutID, WorkoutRepository,
    WorkoutService, estimated_calories, previous_performance,
};
