//! The layout of a calendar week around "today"

use chrono::{Datelike, Duration, NaiveDate};

use crate::task::{DayOfWeek, Task};

/// Fixed English month abbreviations, so that day headers do not depend on the locale
static MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The ISO-8601 week number of a date: week 1 is the week that contains the
/// year's first Thursday.
///
/// Late-December dates can belong to week 1 of the next year, and early-January
/// dates to week 52/53 of the previous one.
pub fn week_number(date: NaiveDate) -> u32 {
    // Weekday with Sunday as 7, then shift to the Thursday of the same week
    let day_num = match date.weekday().num_days_from_sunday() {
        0 => 7,
        n => n,
    };
    let thursday = date + Duration::days(4 - day_num as i64);

    // That Thursday's day-of-year, in weeks, rounded up
    (thursday.ordinal() + 6) / 7
}

/// The Monday that starts the week containing `date`.
///
/// This is date arithmetic, so it rolls over month and year boundaries.
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    let days_after_monday = match date.weekday().num_days_from_sunday() {
        0 => 6,
        n => n - 1,
    };
    date - Duration::days(days_after_monday as i64)
}

/// Zero-padded `MM/DD/YYYY`, the format of the week title boundaries
pub fn format_date_mmddyyyy(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.month(), date.day(), date.year())
}

/// Abbreviated display form for day headers, e.g. "Mar 5" (no year, no leading zero)
pub fn format_date_short(date: NaiveDate) -> String {
    format!("{} {}", MONTH_ABBREVIATIONS[date.month0() as usize], date.day())
}

/// One weekday of the displayed week, and the tasks assigned to it
#[derive(Clone, Debug, PartialEq)]
pub struct DayInfo {
    day_name: DayOfWeek,
    date: NaiveDate,
    date_string: String,
    tasks: Vec<Task>,
}

impl DayInfo {
    pub fn day_name(&self) -> DayOfWeek { self.day_name }
    pub fn date(&self) -> NaiveDate     { self.date }
    pub fn date_string(&self) -> &str   { &self.date_string }
    pub fn tasks(&self) -> &[Task]      { &self.tasks }
}

/// A whole displayed week: the ISO week number, a human-readable title, and
/// seven day buckets running Monday to Sunday.
///
/// A `WeekModel` is rebuilt from scratch on every data refresh and handed to
/// the rendering layer by value; it is never patched in place.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekModel {
    week_number: u32,
    title: String,
    monday: NaiveDate,
    days: Vec<DayInfo>,
}

impl WeekModel {
    /// Lay out the week around `today`, with empty day buckets
    pub fn new(today: NaiveDate) -> Self {
        let week_number = week_number(today);
        let monday = monday_of_week(today);
        let sunday = monday + Duration::days(6);
        let title = format!("Week {} ({} to {})",
            week_number, format_date_mmddyyyy(monday), format_date_mmddyyyy(sunday));

        let days = DayOfWeek::ALL.iter()
            .enumerate()
            .map(|(offset, &day_name)| {
                let date = monday + Duration::days(offset as i64);
                DayInfo {
                    day_name,
                    date,
                    date_string: format_date_short(date),
                    tasks: Vec::new(),
                }
            })
            .collect();

        Self { week_number, title, monday, days }
    }

    /// Lay out the week around `today` and distribute `tasks` into their day
    /// buckets by exact weekday match, preserving the fetched order.
    pub fn build(today: NaiveDate, tasks: Vec<Task>) -> Self {
        let mut week = Self::new(today);
        for task in tasks {
            // buckets are always Monday..Sunday in order
            week.days[task.day_of_week() as usize].tasks.push(task);
        }
        week
    }

    pub fn week_number(&self) -> u32 { self.week_number }
    pub fn title(&self) -> &str      { &self.title }
    pub fn days(&self) -> &[DayInfo] { &self.days }

    /// The bucket holding the tasks of a given weekday
    pub fn day(&self, day: DayOfWeek) -> &DayInfo {
        &self.days[day as usize]
    }

    /// The concrete date a weekday falls on within this week.
    ///
    /// Used to pre-fill the date field when editing a task that only knows its
    /// weekday.
    pub fn date_of(&self, day: DayOfWeek) -> NaiveDate {
        self.monday + Duration::days(day as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{TaskDraft, TaskType};
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task_on(id: i64, day: DayOfWeek) -> Task {
        let draft = TaskDraft {
            title: format!("Task {}", id),
            description: None,
            day_of_week: day,
            time_slot: "12:00 PM".to_string(),
            task_type: TaskType::Other,
            completed: false,
        };
        Task::new_with_parameters(id, draft, "t0".to_string(), "t0".to_string())
    }

    #[test]
    fn iso_week_numbers() {
        assert_eq!(week_number(date(2024, 1, 1)), 1);   // a Monday, week 1 of 2024
        assert_eq!(week_number(date(2023, 1, 1)), 52);  // a Sunday, still in the prior ISO year
        assert_eq!(week_number(date(2020, 12, 31)), 53);
        assert_eq!(week_number(date(2021, 1, 1)), 53);  // Friday of week 53 of 2020
        assert_eq!(week_number(date(2019, 12, 30)), 1); // Monday of week 1 of 2020
        assert_eq!(week_number(date(2025, 6, 11)), 24);
    }

    #[test]
    fn week_numbers_match_chrono() {
        // The Thursday-anchoring rule and chrono's own ISO week must agree,
        // including across year boundaries
        let mut d = date(2019, 12, 20);
        while d < date(2025, 1, 15) {
            assert_eq!(week_number(d), d.iso_week().week(), "mismatch for {}", d);
            d = d + Duration::days(1);
        }
    }

    #[test]
    fn monday_is_a_monday_at_most_six_days_back() {
        let mut d = date(2024, 2, 25); // a Sunday
        for _ in 0..14 {
            let monday = monday_of_week(d);
            assert_eq!(monday.weekday(), Weekday::Mon);
            assert!(monday <= d);
            assert!(d - monday < Duration::days(7));
            d = d + Duration::days(1);
        }
    }

    #[test]
    fn monday_rolls_over_month_and_year_boundaries() {
        assert_eq!(monday_of_week(date(2024, 3, 1)), date(2024, 2, 26));
        assert_eq!(monday_of_week(date(2025, 1, 1)), date(2024, 12, 30));
        assert_eq!(monday_of_week(date(2024, 12, 29)), date(2024, 12, 23)); // a Sunday
        assert_eq!(monday_of_week(date(2024, 12, 30)), date(2024, 12, 30)); // a Monday is its own week start
    }

    #[test]
    fn mmddyyyy_is_zero_padded() {
        assert_eq!(format_date_mmddyyyy(date(2024, 3, 5)), "03/05/2024");
        assert_eq!(format_date_mmddyyyy(date(2024, 11, 23)), "11/23/2024");
    }

    #[test]
    fn short_format_has_no_leading_zeros() {
        assert_eq!(format_date_short(date(2024, 3, 5)), "Mar 5");
        assert_eq!(format_date_short(date(2025, 12, 1)), "Dec 1");
    }

    #[test]
    fn days_run_monday_to_sunday_with_consecutive_dates() {
        let week = WeekModel::new(date(2025, 6, 11));
        assert_eq!(week.days().len(), 7);
        for (offset, day) in week.days().iter().enumerate() {
            assert_eq!(day.day_name(), DayOfWeek::ALL[offset]);
            assert_eq!(day.date(), date(2025, 6, 9) + Duration::days(offset as i64));
            assert!(day.tasks().is_empty());
        }
    }

    #[test]
    fn title_for_a_mid_june_wednesday() {
        let week = WeekModel::new(date(2025, 6, 11));
        assert_eq!(week.week_number(), 24);
        assert_eq!(week.title(), "Week 24 (06/09/2025 to 06/15/2025)");
    }

    #[test]
    fn date_of_maps_weekdays_into_the_displayed_week() {
        let week = WeekModel::new(date(2025, 6, 11));
        assert_eq!(week.date_of(DayOfWeek::Monday), date(2025, 6, 9));
        assert_eq!(week.date_of(DayOfWeek::Wednesday), date(2025, 6, 11));
        assert_eq!(week.date_of(DayOfWeek::Sunday), date(2025, 6, 15));
    }

    #[test]
    fn tasks_land_in_their_own_bucket_only() {
        let tasks = vec![
            task_on(1, DayOfWeek::Wednesday),
            task_on(2, DayOfWeek::Friday),
            task_on(3, DayOfWeek::Wednesday),
        ];
        let week = WeekModel::build(date(2025, 6, 11), tasks);

        let wednesday = week.day(DayOfWeek::Wednesday);
        let ids: Vec<i64> = wednesday.tasks().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![1, 3]); // fetched order is preserved

        assert_eq!(week.day(DayOfWeek::Friday).tasks().len(), 1);
        for day in [DayOfWeek::Monday, DayOfWeek::Tuesday, DayOfWeek::Thursday,
                    DayOfWeek::Saturday, DayOfWeek::Sunday].iter() {
            assert!(week.day(*day).tasks().is_empty());
        }
    }
}
