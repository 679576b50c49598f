use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upper bound on the free-form notes captured in the skills step.
pub const EXTRA_NOTES_MAX_CHARS: usize = 500;

/// Departments offered by the job details step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Finance,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Finance => "Finance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|department| department.label().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Employment arrangement; drives the salary unit and bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 3] = [JobType::FullTime, JobType::PartTime, JobType::Contract];

    pub const fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|job_type| job_type.label().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed catalog of selectable primary skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    JavaScript,
    React,
    #[serde(rename = "Node.js")]
    NodeJs,
    TypeScript,
    Python,
    Django,
    #[serde(rename = "CSS")]
    Css,
    #[serde(rename = "HTML")]
    Html,
}

impl Skill {
    pub const CATALOG: [Skill; 8] = [
        Skill::JavaScript,
        Skill::React,
        Skill::NodeJs,
        Skill::TypeScript,
        Skill::Python,
        Skill::Django,
        Skill::Css,
        Skill::Html,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Skill::JavaScript => "JavaScript",
            Skill::React => "React",
            Skill::NodeJs => "Node.js",
            Skill::TypeScript => "TypeScript",
            Skill::Python => "Python",
            Skill::Django => "Django",
            Skill::Css => "CSS",
            Skill::Html => "HTML",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::CATALOG
            .into_iter()
            .find(|skill| skill.label().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metadata describing an uploaded profile picture. The bytes stay with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePicture {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// Step 1 record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture: Option<ProfilePicture>,
}

/// Step 2 record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobInfo {
    pub department: Option<Department>,
    pub position_title: String,
    pub start_date: Option<NaiveDate>,
    pub job_type: Option<JobType>,
    pub salary: String,
    pub manager: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub skill: Skill,
    pub experience: String,
}

/// Selected skills in selection order, at most one entry per skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrimarySkills(Vec<SkillEntry>);

impl PrimarySkills {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects an unselected skill or drops a selected one together with its experience.
    /// Returns whether the skill is selected afterwards.
    pub fn toggle(&mut self, skill: Skill) -> bool {
        if let Some(index) = self.position(skill) {
            self.0.remove(index);
            false
        } else {
            self.0.push(SkillEntry {
                skill,
                experience: String::new(),
            });
            true
        }
    }

    /// Returns `false` when the skill is not selected.
    pub fn set_experience(&mut self, skill: Skill, experience: impl Into<String>) -> bool {
        match self.0.iter_mut().find(|entry| entry.skill == skill) {
            Some(entry) => {
                entry.experience = experience.into();
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, skill: Skill) -> bool {
        self.position(skill).is_some()
    }

    pub fn experience(&self, skill: Skill) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.skill == skill)
            .map(|entry| entry.experience.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillEntry> {
        self.0.iter()
    }

    fn position(&self, skill: Skill) -> Option<usize> {
        self.0.iter().position(|entry| entry.skill == skill)
    }
}

impl FromIterator<SkillEntry> for PrimarySkills {
    /// Later duplicates overwrite the experience of the first occurrence.
    fn from_iter<I: IntoIterator<Item = SkillEntry>>(iter: I) -> Self {
        let mut skills = PrimarySkills::new();
        for entry in iter {
            if !skills.contains(entry.skill) {
                skills.toggle(entry.skill);
            }
            skills.set_experience(entry.skill, entry.experience);
        }
        skills
    }
}

impl<'de> Deserialize<'de> for PrimarySkills {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<SkillEntry>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingHours {
    pub start: String,
    pub end: String,
}

/// Share of remote work in percent, clamped to `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RemotePreference(u8);

impl RemotePreference {
    pub const MAX: u8 = 100;

    pub fn new(percent: i64) -> Self {
        Self(percent.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for RemotePreference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

/// Step 3 record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsInfo {
    pub primary_skills: PrimarySkills,
    pub working_hours: WorkingHours,
    pub remote_preference: RemotePreference,
    pub extra_notes: String,
}

/// Field name to message mapping for one step. Empty means the step is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first message recorded for a field.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

/// Error map key for the experience entry of a selected skill.
pub fn experience_field(skill: Skill) -> String {
    format!("experience.{}", skill.label())
}

/// Raw draft of all three records, as supplied by a presentation layer or a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingDraft {
    pub personal_info: PersonalInfo,
    pub job_info: JobInfo,
    pub skills_info: SkillsInfo,
}
