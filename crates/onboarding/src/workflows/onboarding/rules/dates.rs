use chrono::{Datelike, Duration, NaiveDate};

use super::super::domain::Department;

pub const MINIMUM_AGE_YEARS: u32 = 18;

/// Start dates may be at most this many days after today (inclusive).
pub const START_DATE_WINDOW_DAYS: i64 = 90;

/// Failures raised by the calendar rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateRuleViolation {
    #[error("You must be at least {minimum} years old")]
    Underage { minimum: u32, age: i32 },
    #[error("Start date cannot be in the past")]
    StartDateInPast,
    #[error("Start date cannot be more than {window_days} days in the future")]
    StartDateBeyondWindow { window_days: i64 },
    #[error("For HR/Finance, start date cannot be on Friday or Saturday")]
    ExcludedWeekend { department: Department, weekday: u32 },
}

/// Completed years between `date_of_birth` and `today`. Negative for future birth dates.
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    years
}

pub fn minimum_age(
    date_of_birth: NaiveDate,
    today: NaiveDate,
    minimum: u32,
) -> Result<(), DateRuleViolation> {
    let age = age_in_years(date_of_birth, today);
    if age < minimum as i32 {
        return Err(DateRuleViolation::Underage { minimum, age });
    }
    Ok(())
}

/// 0 = Sunday through 6 = Saturday.
pub fn day_of_week_class(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// HR and Finance treat Friday and Saturday as the weekend.
pub fn is_excluded_weekend_for(department: Department, date: NaiveDate) -> bool {
    matches!(department, Department::Hr | Department::Finance)
        && matches!(day_of_week_class(date), 5 | 6)
}

/// Past beats window, window beats weekend.
pub fn validate_start_date(
    department: Option<Department>,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<(), DateRuleViolation> {
    if date < today {
        return Err(DateRuleViolation::StartDateInPast);
    }

    let latest = today + Duration::days(START_DATE_WINDOW_DAYS);
    if date > latest {
        return Err(DateRuleViolation::StartDateBeyondWindow {
            window_days: START_DATE_WINDOW_DAYS,
        });
    }

    if let Some(department) = department {
        if is_excluded_weekend_for(department, date) {
            return Err(DateRuleViolation::ExcludedWeekend {
                department,
                weekday: day_of_week_class(date),
            });
        }
    }

    Ok(())
}
