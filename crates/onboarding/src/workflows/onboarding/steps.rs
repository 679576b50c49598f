use chrono::NaiveDate;

use super::domain::{experience_field, ErrorMap, JobInfo, PersonalInfo, SkillsInfo};
use super::rules::{
    is_in_range, is_non_empty, is_valid_email, is_valid_phone, minimum_age, parse_number,
    parse_time_to_minutes, salary_band, validate_start_date, SalaryUnit, MINIMUM_AGE_YEARS,
};

/// Skills that must be selected before the skills step can be left.
pub const MINIMUM_SKILLS: usize = 3;

/// Personal information. The profile picture is checked at upload time, never here.
pub fn validate_step1(info: &PersonalInfo, today: NaiveDate) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if !is_non_empty(&info.full_name) {
        errors.insert("full_name", "Full name is required");
    } else if info.full_name.split_whitespace().count() < 2 {
        errors.insert("full_name", "Full name must contain at least 2 words");
    }

    if !is_non_empty(&info.email) {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(&info.email) {
        errors.insert("email", "Invalid email");
    }

    if !is_non_empty(&info.phone_number) {
        errors.insert("phone_number", "Phone number is required");
    } else if !is_valid_phone(&info.phone_number) {
        errors.insert(
            "phone_number",
            "Invalid phone format (expected 1-123-456-7890)",
        );
    }

    match info.date_of_birth {
        None => errors.insert("date_of_birth", "Date of birth is required"),
        Some(date_of_birth) => {
            if let Err(violation) = minimum_age(date_of_birth, today, MINIMUM_AGE_YEARS) {
                errors.insert("date_of_birth", violation.to_string());
            }
        }
    }

    errors
}

/// Job details, including the department-aware start date and job-type salary bounds.
pub fn validate_step2(info: &JobInfo, today: NaiveDate) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if info.department.is_none() {
        errors.insert("department", "Department is required");
    }

    if !is_non_empty(&info.position_title) {
        errors.insert("position_title", "Position title is required");
    }

    match info.start_date {
        None => errors.insert("start_date", "Start date is required"),
        Some(start_date) => {
            if let Err(violation) = validate_start_date(info.department, start_date, today) {
                errors.insert("start_date", violation.to_string());
            }
        }
    }

    match info.job_type {
        None => errors.insert("job_type", "Job type is required"),
        Some(job_type) => {
            if !is_non_empty(&info.salary) {
                errors.insert("salary", "Salary is required");
            } else {
                match parse_number(&info.salary) {
                    None => errors.insert("salary", "Salary must be a number"),
                    Some(amount) => {
                        let band = salary_band(job_type);
                        if !is_in_range(amount, band.min, band.max) {
                            let message = match band.unit {
                                SalaryUnit::Annual => {
                                    "Annual salary must be between $30,000 and $200,000"
                                }
                                SalaryUnit::Hourly => "Hourly rate must be between $50 and $150",
                            };
                            errors.insert("salary", message);
                        }
                    }
                }
            }
        }
    }

    errors
}

/// Skills and preferences. Remote preference and notes are bounded at input time.
pub fn validate_step3(info: &SkillsInfo) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if info.primary_skills.len() < MINIMUM_SKILLS {
        errors.insert("primary_skills", "Select at least 3 skills");
    }

    for entry in info.primary_skills.iter() {
        let field = experience_field(entry.skill);
        if !is_non_empty(&entry.experience) {
            errors.insert(field, "Experience is required");
            continue;
        }

        match parse_number(&entry.experience) {
            Some(years) if years >= 0.0 => {}
            _ => errors.insert(field, "Experience must be a non-negative number"),
        }
    }

    let hours = &info.working_hours;
    for (field, value) in [
        ("working_hours.start", &hours.start),
        ("working_hours.end", &hours.end),
    ] {
        if is_non_empty(value) && parse_time_to_minutes(value.trim()).is_none() {
            errors.insert(field, "Time must use the HH:MM format");
        }
    }

    errors
}
