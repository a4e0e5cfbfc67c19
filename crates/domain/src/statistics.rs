//! Read-only aggregations over the workout archive, feeding the dashboard
//! and history views. All functions are pure; the reference instant is an
//! explicit parameter.

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::Workout;

const THIS_WEEK: &str = "Esta Semana";
const LAST_WEEK: &str = "Semana Pasada";

const MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

const WEEKDAYS: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryGroup {
    pub label: String,
    pub workouts: Vec<Workout>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyPoint {
    pub day: &'static str,
    pub calories: u32,
    pub volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_calories: u64,
    pub workouts_this_week: usize,
}

/// Workouts grouped by recency, newest first. Entries up to a week old fall
/// into "Esta Semana", up to two weeks into "Semana Pasada", older ones under
/// their month name. Groups appear in the order their first workout does.
#[must_use]
pub fn history_groups(workouts: &[Workout], now: DateTime<Utc>) -> Vec<HistoryGroup> {
    let mut sorted = workouts.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut groups: Vec<HistoryGroup> = vec![];
    for workout in sorted {
        let label = recency_label(workout.date, now);
        if let Some(group) = groups.iter_mut().find(|g| g.label == label) {
            group.workouts.push(workout);
        } else {
            groups.push(HistoryGroup {
                label,
                workouts: vec![workout],
            });
        }
    }
    groups
}

fn recency_label(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let diff_days = ((now - date).num_milliseconds().abs() as f64 / 86_400_000.0).ceil() as i64;
    if diff_days <= 7 {
        THIS_WEEK.to_string()
    } else if diff_days <= 14 {
        LAST_WEEK.to_string()
    } else {
        MONTHS[date.month0() as usize].to_string()
    }
}

/// Chart series over the last seven archived workouts, in archive order.
#[must_use]
pub fn weekly_series(workouts: &[Workout]) -> Vec<WeeklyPoint> {
    let skip = workouts.len().saturating_sub(7);
    workouts[skip..]
        .iter()
        .map(|w| WeeklyPoint {
            day: WEEKDAYS[w.date.weekday().num_days_from_monday() as usize],
            calories: w.calories_burned,
            volume: w.total_volume(),
        })
        .collect()
}

/// Dashboard totals. A workout counts towards the current week while it is
/// less than seven days old.
#[must_use]
pub fn summary(workouts: &[Workout], now: DateTime<Utc>) -> Summary {
    Summary {
        total_calories: workouts.iter().map(|w| u64::from(w.calories_burned)).sum(),
        workouts_this_week: workouts
            .iter()
            .filter(|w| now - w.date < Duration::days(7))
            .count(),
    }
}
