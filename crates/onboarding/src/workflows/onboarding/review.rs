use serde::Serialize;

use super::domain::{JobInfo, PersonalInfo, SkillsInfo};
use super::rules::{normalize_salary_unit, SalaryUnit};

/// Read-only union of the three validated records, handed to the submission collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingReview {
    pub personal_info: PersonalInfo,
    pub job_info: JobInfo,
    pub skills_info: SkillsInfo,
    pub salary_unit: SalaryUnit,
}

impl OnboardingReview {
    pub(crate) fn snapshot(personal: &PersonalInfo, job: &JobInfo, skills: &SkillsInfo) -> Self {
        Self {
            personal_info: personal.clone(),
            job_info: job.clone(),
            skills_info: skills.clone(),
            salary_unit: normalize_salary_unit(job.job_type),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// One line per field group, used by the CLI.
    pub fn summary_lines(&self) -> Vec<String> {
        let personal = &self.personal_info;
        let job = &self.job_info;
        let skills = &self.skills_info;

        let mut lines = vec![
            format!("Name: {}", personal.full_name.trim()),
            format!("Contact: {} / {}", personal.email, personal.phone_number),
        ];

        if let Some(date_of_birth) = personal.date_of_birth {
            lines.push(format!("Date of birth: {date_of_birth}"));
        }
        if let Some(picture) = &personal.profile_picture {
            lines.push(format!("Profile picture: {}", picture.file_name));
        }

        let department = job.department.map(|d| d.label()).unwrap_or("-");
        lines.push(format!("Position: {} ({department})", job.position_title.trim()));
        if let Some(start_date) = job.start_date {
            lines.push(format!("Start date: {start_date}"));
        }
        if let Some(job_type) = job.job_type {
            lines.push(format!(
                "Compensation: {} {} ({})",
                job.salary,
                self.salary_unit.label(),
                job_type.label()
            ));
        }
        if !job.manager.trim().is_empty() {
            lines.push(format!("Manager: {}", job.manager.trim()));
        }

        let skill_list: Vec<String> = skills
            .primary_skills
            .iter()
            .map(|entry| format!("{} ({}y)", entry.skill.label(), entry.experience.trim()))
            .collect();
        lines.push(format!("Skills: {}", skill_list.join(", ")));

        let hours = &skills.working_hours;
        if !hours.start.is_empty() || !hours.end.is_empty() {
            lines.push(format!("Working hours: {} - {}", hours.start, hours.end));
        }
        lines.push(format!(
            "Remote preference: {}%",
            skills.remote_preference.percent()
        ));
        if !skills.extra_notes.is_empty() {
            lines.push(format!("Notes: {}", skills.extra_notes));
        }

        lines
    }
}
