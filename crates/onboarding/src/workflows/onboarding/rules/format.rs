use serde::Serialize;

use super::super::domain::JobType;

/// Significant digits kept by the phone mask.
pub const PHONE_DIGITS: usize = 11;

/// Re-masks a phone number as `D-DDD-DDD-DDDD` while the user types.
///
/// Only ASCII digits survive, capped at eleven. The full mask appears from ten digits on,
/// and the output is stable under reformatting.
pub fn format_phone_progressive(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..1], &digits[1..]),
        7..=9 => format!("{}-{}-{}", &digits[..1], &digits[1..4], &digits[4..]),
        _ => format!(
            "{}-{}-{}-{}",
            &digits[..1],
            &digits[1..4],
            &digits[4..7],
            &digits[7..]
        ),
    }
}

/// Strips currency symbols, grouping commas and whitespace from a typed amount.
pub fn normalize_amount(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '$' && *c != ',')
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryUnit {
    Annual,
    Hourly,
}

impl SalaryUnit {
    pub const fn label(self) -> &'static str {
        match self {
            SalaryUnit::Annual => "annual",
            SalaryUnit::Hourly => "hourly",
        }
    }
}

/// Display unit for the salary prompt; the stored value is never touched.
pub fn normalize_salary_unit(job_type: Option<JobType>) -> SalaryUnit {
    match job_type {
        Some(JobType::FullTime) => SalaryUnit::Annual,
        _ => SalaryUnit::Hourly,
    }
}

/// Inclusive salary bounds for a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryBand {
    pub unit: SalaryUnit,
    pub min: f64,
    pub max: f64,
}

pub fn salary_band(job_type: JobType) -> SalaryBand {
    match normalize_salary_unit(Some(job_type)) {
        SalaryUnit::Annual => SalaryBand {
            unit: SalaryUnit::Annual,
            min: 30_000.0,
            max: 200_000.0,
        },
        SalaryUnit::Hourly => SalaryBand {
            unit: SalaryUnit::Hourly,
            min: 50.0,
            max: 150.0,
        },
    }
}

pub fn salary_placeholder(job_type: Option<JobType>) -> &'static str {
    match normalize_salary_unit(job_type) {
        SalaryUnit::Annual => "Annual salary ($30,000 - $200,000)",
        SalaryUnit::Hourly => "Hourly rate ($50 - $150)",
    }
}
