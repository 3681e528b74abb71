use crate::models::{AppData, DaySummary, Habit};
use chrono::{Datelike, NaiveDate};

/// Weekday index of a date, 0 = Sunday .. 6 = Saturday.
///
/// Habit recurrence values are stored against this same numbering, so every
/// eligibility check must go through this function rather than deriving the
/// weekday some other way.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// A habit is eligible (scheduled) on a date when the date's weekday is part
/// of its recurrence and the habit already existed on that date. Creation
/// day itself counts.
pub fn is_eligible(habit: &Habit, date: NaiveDate) -> bool {
    habit.created_at <= date && habit.week_days.contains(&weekday_index(date))
}

pub fn possible_habits(data: &AppData, date: NaiveDate) -> Vec<Habit> {
    data.habits
        .iter()
        .filter(|habit| is_eligible(habit, date))
        .cloned()
        .collect()
}

/// Per-day progress over every stored day: completions recorded that day and
/// habits that were scheduled that day. Ascending by date.
pub fn build_summary(data: &AppData) -> Vec<DaySummary> {
    data.days
        .values()
        .map(|day| DaySummary {
            id: day.id,
            date: day.date,
            completed: data
                .completions
                .iter()
                .filter(|c| c.day_id == day.id)
                .count() as u32,
            amount: data
                .habits
                .iter()
                .filter(|habit| is_eligible(habit, day.date))
                .count() as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekday_convention_is_sunday_first() {
        // 2023-01-01 was a Sunday, 2023-01-07 a Saturday.
        assert_eq!(weekday_index(date(2023, 1, 1)), 0);
        assert_eq!(weekday_index(date(2023, 1, 2)), 1);
        assert_eq!(weekday_index(date(2023, 1, 7)), 6);
    }

    #[test]
    fn habit_is_eligible_on_recurrence_days_after_creation() {
        let mut data = AppData::default();
        // Monday and Wednesday.
        data.insert_habit("read".into(), date(2023, 1, 1), BTreeSet::from([1, 3]));
        let habit = &data.habits[0];

        assert!(is_eligible(habit, date(2023, 1, 2))); // Monday
        assert!(is_eligible(habit, date(2023, 1, 4))); // Wednesday
        assert!(!is_eligible(habit, date(2023, 1, 1))); // Sunday, not scheduled
        assert!(!is_eligible(habit, date(2023, 1, 3))); // Tuesday
    }

    #[test]
    fn creation_day_counts_as_eligible() {
        let mut data = AppData::default();
        // Created on a Monday with Monday in the recurrence.
        data.insert_habit("run".into(), date(2023, 1, 2), BTreeSet::from([1]));
        let habit = &data.habits[0];

        assert!(is_eligible(habit, date(2023, 1, 2)));
        assert!(!is_eligible(habit, date(2022, 12, 26))); // Monday before creation
    }

    #[test]
    fn summary_counts_completions_and_scheduled_habits() {
        let mut data = AppData::default();
        let read = data.insert_habit("read".into(), date(2023, 1, 1), BTreeSet::from([1, 3]));
        data.insert_habit("run".into(), date(2023, 1, 1), BTreeSet::from([1]));

        let monday = data.or_create_day(date(2023, 1, 2));
        data.toggle_completion(monday.id, read.id);

        let summary = build_summary(&data);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].date, date(2023, 1, 2));
        assert_eq!(summary[0].completed, 1);
        assert_eq!(summary[0].amount, 2);
    }

    #[test]
    fn summary_is_ascending_by_date() {
        let mut data = AppData::default();
        data.or_create_day(date(2023, 3, 5));
        data.or_create_day(date(2023, 1, 2));
        data.or_create_day(date(2023, 2, 14));

        let dates: Vec<_> = build_summary(&data).iter().map(|s| s.date).collect();
        assert_eq!(
            dates,
            vec![date(2023, 1, 2), date(2023, 2, 14), date(2023, 3, 5)]
        );
    }

    #[test]
    fn empty_store_yields_empty_summary() {
        assert!(build_summary(&AppData::default()).is_empty());
    }

    #[test]
    fn possible_habits_filters_by_date() {
        let mut data = AppData::default();
        let read = data.insert_habit("read".into(), date(2023, 1, 1), BTreeSet::from([1, 3]));
        data.insert_habit("stretch".into(), date(2023, 1, 1), BTreeSet::from([0]));

        let monday = possible_habits(&data, date(2023, 1, 2));
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].id, read.id);
    }
}
