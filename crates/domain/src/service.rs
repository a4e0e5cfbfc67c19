use log::error;

use crate::{
    CreateError, DeleteError, ReadError, Routine, RoutineID, RoutineRepository, RoutineService,
    SessionDraft, SessionRepository, SessionService, StorageError, UpdateError, Workout,
    WorkoutRepository, WorkoutService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(self.repository.read_workouts(), "get", "workouts")
    }

    fn add_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
        log_on_error!(self.repository.create_workout(workout), "add", "workout")
    }
}

impl<R: RoutineRepository> RoutineService for Service<R> {
    fn get_routines(&self) -> Result<Vec<Routine>, ReadError> {
        log_on_error!(self.repository.read_routines(), "get", "routines")
    }

    fn add_routine(&self, routine: Routine) -> Result<Routine, CreateError> {
        log_on_error!(self.repository.create_routine(routine), "add", "routine")
    }

    fn modify_routine(&self, routine: Routine) -> Result<Routine, UpdateError> {
        log_on_error!(
            self.repository.replace_routine(routine),
            "modify",
            "routine"
        )
    }

    fn remove_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError> {
        log_on_error!(self.repository.delete_routine(id), "remove", "routine")
    }
}

impl<R: SessionRepository> SessionService for Service<R> {
    fn get_session_draft(&self) -> Result<Option<SessionDraft>, ReadError> {
        log_on_error!(
            self.repository.read_session_draft(),
            "get",
            "session draft"
        )
    }

    fn store_session_draft(&self, draft: &SessionDraft) -> Result<(), StorageError> {
        log_on_error!(
            self.repository.write_session_draft(Some(draft)),
            "store",
            "session draft"
        )
    }

    fn clear_session_draft(&self) -> Result<(), StorageError> {
        log_on_error!(
            self.repository.write_session_draft(None),
            "clear",
            "session draft"
        )
    }
}
