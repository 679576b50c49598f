//! Pure field rules shared by the step validators.

mod dates;
mod format;
mod primitives;

pub use dates::{
    age_in_years, day_of_week_class, is_excluded_weekend_for, minimum_age, validate_start_date,
    DateRuleViolation, MINIMUM_AGE_YEARS, START_DATE_WINDOW_DAYS,
};
pub use format::{
    format_phone_progressive, normalize_amount, normalize_salary_unit, salary_band,
    salary_placeholder, SalaryBand, SalaryUnit, PHONE_DIGITS,
};
pub use primitives::{
    is_in_range, is_non_empty, is_valid_email, is_valid_phone, is_within_length, parse_number,
    parse_time_to_minutes, truncate_chars,
};
