use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// A tracked habit. `week_days` holds weekday indices (0 = Sunday .. 6 =
/// Saturday) and is immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub title: String,
    pub created_at: NaiveDate,
    pub week_days: BTreeSet<u8>,
}

/// A calendar day with at least one completion event. Created lazily on the
/// first toggle for its date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    pub id: Uuid,
    pub date: NaiveDate,
}

/// Evidence that a habit was completed on a day. At most one per
/// (day, habit) pair; removed on toggle-off, no history kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub day_id: Uuid,
    pub habit_id: Uuid,
}

/// The persisted store. Days are keyed by ISO date string, which gives both
/// the one-day-per-date invariant and ascending date order for the summary.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub habits: Vec<Habit>,
    pub days: BTreeMap<String, Day>,
    pub completions: Vec<Completion>,
}

impl AppData {
    pub fn insert_habit(
        &mut self,
        title: String,
        created_at: NaiveDate,
        week_days: BTreeSet<u8>,
    ) -> Habit {
        let habit = Habit {
            id: Uuid::new_v4(),
            title,
            created_at,
            week_days,
        };
        self.habits.push(habit.clone());
        habit
    }

    pub fn habit(&self, id: Uuid) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    pub fn day_for(&self, date: NaiveDate) -> Option<&Day> {
        self.days.get(&date_key(date))
    }

    pub fn or_create_day(&mut self, date: NaiveDate) -> Day {
        self.days
            .entry(date_key(date))
            .or_insert_with(|| Day {
                id: Uuid::new_v4(),
                date,
            })
            .clone()
    }

    /// Flips the completion state of `habit_id` on `day_id` and returns the
    /// new state (`true` = now completed).
    pub fn toggle_completion(&mut self, day_id: Uuid, habit_id: Uuid) -> bool {
        let existing = self
            .completions
            .iter()
            .position(|c| c.day_id == day_id && c.habit_id == habit_id);
        match existing {
            Some(index) => {
                self.completions.remove(index);
                false
            }
            None => {
                self.completions.push(Completion { day_id, habit_id });
                true
            }
        }
    }

    pub fn completed_habit_ids(&self, day_id: Uuid) -> Vec<Uuid> {
        self.completions
            .iter()
            .filter(|c| c.day_id == day_id)
            .map(|c| c.habit_id)
            .collect()
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub title: String,
    pub week_days: Vec<u8>,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayDetailResponse {
    pub possible_habits: Vec<Habit>,
    pub completed_habits: Vec<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DaySummary {
    pub id: Uuid,
    pub date: NaiveDate,
    pub completed: u32,
    pub amount: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn or_create_day_is_unique_per_date() {
        let mut data = AppData::default();
        let first = data.or_create_day(date(2023, 1, 2));
        let second = data.or_create_day(date(2023, 1, 2));
        assert_eq!(first.id, second.id);
        assert_eq!(data.days.len(), 1);

        data.or_create_day(date(2023, 1, 3));
        assert_eq!(data.days.len(), 2);
    }

    #[test]
    fn toggle_twice_restores_completion_set() {
        let mut data = AppData::default();
        let habit = data.insert_habit("read".into(), date(2023, 1, 1), BTreeSet::from([1]));
        let day = data.or_create_day(date(2023, 1, 2));

        assert!(data.toggle_completion(day.id, habit.id));
        assert_eq!(data.completed_habit_ids(day.id), vec![habit.id]);

        assert!(!data.toggle_completion(day.id, habit.id));
        assert!(data.completed_habit_ids(day.id).is_empty());
    }

    #[test]
    fn at_most_one_completion_per_pair() {
        let mut data = AppData::default();
        let habit = data.insert_habit("run".into(), date(2023, 1, 1), BTreeSet::from([0]));
        let day = data.or_create_day(date(2023, 1, 8));

        for _ in 0..5 {
            data.toggle_completion(day.id, habit.id);
            assert!(data.completed_habit_ids(day.id).len() <= 1);
        }
    }
}
