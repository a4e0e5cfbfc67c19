use chrono::{DateTime, Utc};
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CreateError, ReadError};

/// MET value assumed for exercises without a catalog match.
const DEFAULT_MET: f64 = 5.0;
/// Assumed body mass in kilograms. Not configurable.
const ASSUMED_BODY_MASS_KG: f64 = 75.0;
/// Minutes attributed to each recorded set.
const MINUTES_PER_SET: f64 = 3.0;

pub trait WorkoutRepository {
    fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
}

pub trait WorkoutService {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn add_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
}

/// A completed training session. Immutable once appended to the archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: WorkoutID,
    pub date: DateTime<Utc>,
    pub title: String,
    pub exercises: Vec<Exercise>,
    #[serde(rename = "caloriesBurned")]
    pub calories_burned: u32,
    pub duration: u32,
}

impl Workout {
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.exercises.iter().map(Exercise::volume).sum()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub sets: Vec<Set>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<ExerciseType>,
    #[serde(rename = "metValue", default, skip_serializing_if = "Option::is_none")]
    pub met_value: Option<f64>,
}

impl Exercise {
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.sets
            .iter()
            .map(|s| s.weight * f64::from(s.reps))
            .sum()
    }

    #[must_use]
    pub fn met_or_default(&self) -> f64 {
        self.met_value.unwrap_or(DEFAULT_MET)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Strength,
    Cardio,
    Bodyweight,
    Flexibility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    pub id: SetID,
    pub weight: f64,
    pub reps: u32,
    pub completed: bool,
}

impl Set {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: SetID::new(),
            weight: 0.0,
            reps: 0,
            completed: false,
        }
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SetID(Uuid);

impl SetID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for SetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Calorie estimate for a set of exercises.
///
/// Each exercise contributes `MET × body mass × hours`, where the time on an
/// exercise is `MINUTES_PER_SET` per recorded set. The sum is rounded once.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn estimated_calories(exercises: &[Exercise]) -> u32 {
    exercises
        .iter()
        .map(|e| {
            let hours = e.sets.len() as f64 * MINUTES_PER_SET / 60.0;
            e.met_or_default() * ASSUMED_BODY_MASS_KG * hours
        })
        .sum::<f64>()
        .round() as u32
}

/// The most recent prior performance of an exercise, by exact name.
#[must_use]
pub fn previous_performance<'a>(history: &'a [Workout], name: &str) -> Option<&'a Exercise> {
    history
        .iter()
        .rev()
        .find_map(|w| w.exercises.iter().find(|e| e.name == name))
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(name: &str, met_value: Option<f64>, sets: Vec<Set>) -> Exercise {
        Exercise {
            id: ExerciseID::new(),
            name: name.to_string(),
            sets,
            exercise_type: Some(ExerciseType::Strength),
            met_value,
        }
    }

    fn set(weight: f64, reps: u32) -> Set {
        Set {
            id: SetID::new(),
            weight,
            reps,
            completed: true,
        }
    }

    fn workout(title: &str, exercises: Vec<Exercise>) -> Workout {
        Workout {
            id: WorkoutID::new(),
            date: Utc.with_ymd_and_hms(2020, 2, 2, 12, 0, 0).unwrap(),
            title: title.to_string(),
            exercises,
            calories_burned: 0,
            duration: 0,
        }
    }

    #[rstest]
    #[case::default_met(vec![(None, 1)], 19)]
    #[case::single_exercise(vec![(Some(7.5), 4)], 113)]
    #[case::rounded_once_over_the_sum(vec![(Some(7.5), 2), (Some(7.5), 2)], 113)]
    #[case::no_sets(vec![(Some(7.5), 0)], 0)]
    #[case::no_exercises(vec![], 0)]
    fn test_estimated_calories(#[case] exercises: Vec<(Option<f64>, usize)>, #[case] expected: u32) {
        let exercises = exercises
            .into_iter()
            .map(|(met, sets)| exercise("A", met, (0..sets).map(|_| set(0.0, 0)).collect()))
            .collect::<Vec<_>>();
        assert_eq!(estimated_calories(&exercises), expected);
    }

    #[test]
    fn test_total_volume() {
        let w = workout(
            "A",
            vec![
                exercise("A", None, vec![set(30.0, 10), set(32.5, 8)]),
                exercise("B", None, vec![set(50.0, 5)]),
            ],
        );
        assert_approx_eq!(w.total_volume(), 30.0 * 10.0 + 32.5 * 8.0 + 50.0 * 5.0);
    }

    #[test]
    fn test_previous_performance_returns_newest_match() {
        let history = vec![
            workout("A", vec![exercise("Jalón al Pecho", Some(4.5), vec![set(70.0, 8)])]),
            workout("B", vec![exercise("Jalón al Pecho", Some(4.5), vec![set(75.0, 8)])]),
            workout("C", vec![exercise("Face Pulls", Some(3.0), vec![set(20.0, 15)])]),
        ];
        let previous = previous_performance(&history, "Jalón al Pecho").unwrap();
        assert_approx_eq!(previous.sets[0].weight, 75.0);
        assert_eq!(previous_performance(&history, "Deadbug"), None);
    }

    #[test]
    fn test_workout_json_format() {
        let w = Workout {
            id: 1.into(),
            date: Utc.with_ymd_and_hms(2020, 2, 2, 12, 0, 0).unwrap(),
            title: "Sesión Táctica".to_string(),
            exercises: vec![exercise("Rucking", Some(8.5), vec![set(10.0, 1)])],
            calories_burned: 32,
            duration: 3600,
        };
        let document = serde_json::to_string(&w).unwrap();
        assert!(document.contains("\"caloriesBurned\":32"));
        assert!(document.contains("\"metValue\":8.5"));
        assert!(document.contains("\"type\":\"strength\""));
        assert_eq!(serde_json::from_str::<Workout>(&document).unwrap(), w);
    }
}
