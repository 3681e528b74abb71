use chrono::{Datelike, Duration, NaiveDate};

/// The progress grid starts this many days after January 1st.
pub const YEAR_START_OFFSET_DAYS: i64 = 203;

/// Dates shown on the progress grid: from the configured offset after year
/// start through yesterday, one entry per calendar day.
pub fn tracked_dates(today: NaiveDate) -> Vec<NaiveDate> {
    dates_from_year_beginning(today, YEAR_START_OFFSET_DAYS)
}

/// Consecutive dates from (Jan 1 of `today`'s year + `offset_days`) up to but
/// excluding `today`, ascending. Empty when the offset lands on or after
/// today.
pub fn dates_from_year_beginning(today: NaiveDate, offset_days: i64) -> Vec<NaiveDate> {
    let Some(first_day_of_year) = NaiveDate::from_ymd_opt(today.year(), 1, 1) else {
        return Vec::new();
    };

    let mut date = first_day_of_year + Duration::days(offset_days);
    let mut dates = Vec::new();
    while date < today {
        dates.push(date);
        date += Duration::days(1);
    }
    dates
}
