use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::{
    Department, ErrorMap, JobInfo, JobType, OnboardingDraft, PersonalInfo, ProfilePicture,
    RemotePreference, Skill, SkillsInfo, EXTRA_NOTES_MAX_CHARS,
};
use super::review::OnboardingReview;
use super::rules::{format_phone_progressive, normalize_amount, truncate_chars};
use super::steps::{validate_step1, validate_step2, validate_step3};
use super::upload::{check_profile_picture, Notice, Notifier, UploadRejection};

/// Position in the form. `Review` is terminal.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    #[default]
    PersonalInfo,
    JobDetails,
    SkillsPreferences,
    Review,
}

impl FormStep {
    pub const fn number(self) -> u8 {
        match self {
            FormStep::PersonalInfo => 1,
            FormStep::JobDetails => 2,
            FormStep::SkillsPreferences => 3,
            FormStep::Review => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FormStep::PersonalInfo => "Personal Info",
            FormStep::JobDetails => "Job Details",
            FormStep::SkillsPreferences => "Skills & Preferences",
            FormStep::Review => "Review",
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            FormStep::PersonalInfo => Some(FormStep::JobDetails),
            FormStep::JobDetails => Some(FormStep::SkillsPreferences),
            FormStep::SkillsPreferences => Some(FormStep::Review),
            FormStep::Review => None,
        }
    }

    pub const fn previous(self) -> Option<Self> {
        match self {
            FormStep::PersonalInfo => None,
            FormStep::JobDetails => Some(FormStep::PersonalInfo),
            FormStep::SkillsPreferences => Some(FormStep::JobDetails),
            FormStep::Review => Some(FormStep::SkillsPreferences),
        }
    }
}

impl fmt::Display for FormStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.label())
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: FormStep, to: FormStep },
    Retreated { from: FormStep, to: FormStep },
    Blocked { step: FormStep, errors: ErrorMap },
    Unchanged { step: FormStep },
}

impl Transition {
    pub fn step(&self) -> FormStep {
        match self {
            Transition::Advanced { to, .. } | Transition::Retreated { to, .. } => *to,
            Transition::Blocked { step, .. } | Transition::Unchanged { step } => *step,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the review step is read-only")]
    ReviewIsReadOnly,
    #[error("cannot edit {requested} while {current} is active")]
    StepNotActive {
        requested: FormStep,
        current: FormStep,
    },
    #[error("{0} is not a selected skill")]
    SkillNotSelected(Skill),
    #[error(transparent)]
    Upload(#[from] UploadRejection),
}

/// Owns the three step records, the active step and that step's errors.
///
/// Edits are accepted only for the record of the active step. Going back never
/// re-validates, and advancing only validates the step being left, so earlier
/// steps edited after a successful `next` are not re-checked later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSession {
    personal: PersonalInfo,
    job: JobInfo,
    skills: SkillsInfo,
    current_step: FormStep,
    errors: ErrorMap,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a session at step 1, routing each value through the same input rules as live edits.
    pub fn from_draft(draft: OnboardingDraft, notifier: &dyn Notifier) -> Self {
        let OnboardingDraft {
            mut personal_info,
            mut job_info,
            mut skills_info,
        } = draft;

        let picture = personal_info.profile_picture.take();
        personal_info.phone_number = format_phone_progressive(&personal_info.phone_number);
        job_info.salary = normalize_amount(&job_info.salary);
        skills_info.extra_notes = truncate_chars(&skills_info.extra_notes, EXTRA_NOTES_MAX_CHARS);

        let mut session = Self {
            personal: personal_info,
            job: job_info,
            skills: skills_info,
            ..Self::default()
        };

        if let Some(picture) = picture {
            // Rejections are already surfaced through the notifier.
            let _ = session.attach_profile_picture(picture, notifier);
        }

        session
    }

    pub fn current_step(&self) -> FormStep {
        self.current_step
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn personal(&self) -> &PersonalInfo {
        &self.personal
    }

    pub fn job(&self) -> &JobInfo {
        &self.job
    }

    pub fn skills(&self) -> &SkillsInfo {
        &self.skills
    }

    /// Runs the active step's validator without navigating or touching stored errors.
    pub fn preview_errors(&self, today: NaiveDate) -> ErrorMap {
        match self.current_step {
            FormStep::PersonalInfo => validate_step1(&self.personal, today),
            FormStep::JobDetails => validate_step2(&self.job, today),
            FormStep::SkillsPreferences => validate_step3(&self.skills),
            FormStep::Review => ErrorMap::new(),
        }
    }

    /// Advances when the active step validates; otherwise records its errors and stays.
    pub fn next(&mut self, today: NaiveDate) -> Transition {
        let from = self.current_step;
        let Some(to) = from.next() else {
            return Transition::Unchanged { step: from };
        };

        let errors = self.preview_errors(today);
        if !errors.is_empty() {
            debug!(step = from.number(), errors = errors.len(), "step blocked");
            self.errors = errors.clone();
            return Transition::Blocked { step: from, errors };
        }

        self.errors.clear();
        self.current_step = to;
        debug!(from = from.number(), to = to.number(), "step advanced");
        Transition::Advanced { from, to }
    }

    /// Moves one step back without validating. Entered data is kept.
    pub fn back(&mut self) -> Transition {
        let from = self.current_step;
        let Some(to) = from.previous() else {
            return Transition::Unchanged { step: from };
        };

        self.errors.clear();
        self.current_step = to;
        debug!(from = from.number(), to = to.number(), "step retreated");
        Transition::Retreated { from, to }
    }

    /// The submission snapshot, available only on the review step.
    pub fn review(&self) -> Option<OnboardingReview> {
        (self.current_step == FormStep::Review)
            .then(|| OnboardingReview::snapshot(&self.personal, &self.job, &self.skills))
    }

    fn ensure_active(&self, step: FormStep) -> Result<(), SessionError> {
        if self.current_step == FormStep::Review {
            return Err(SessionError::ReviewIsReadOnly);
        }
        if self.current_step != step {
            return Err(SessionError::StepNotActive {
                requested: step,
                current: self.current_step,
            });
        }
        Ok(())
    }

    fn personal_mut(&mut self) -> Result<&mut PersonalInfo, SessionError> {
        self.ensure_active(FormStep::PersonalInfo)?;
        Ok(&mut self.personal)
    }

    fn job_mut(&mut self) -> Result<&mut JobInfo, SessionError> {
        self.ensure_active(FormStep::JobDetails)?;
        Ok(&mut self.job)
    }

    fn skills_mut(&mut self) -> Result<&mut SkillsInfo, SessionError> {
        self.ensure_active(FormStep::SkillsPreferences)?;
        Ok(&mut self.skills)
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.personal_mut()?.full_name = value.into();
        Ok(())
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.personal_mut()?.email = value.into();
        Ok(())
    }

    /// Stores the progressively masked form of the typed value.
    pub fn set_phone_number(&mut self, raw: &str) -> Result<(), SessionError> {
        self.personal_mut()?.phone_number = format_phone_progressive(raw);
        Ok(())
    }

    pub fn set_date_of_birth(&mut self, value: Option<NaiveDate>) -> Result<(), SessionError> {
        self.personal_mut()?.date_of_birth = value;
        Ok(())
    }

    /// Stores the picture only when it passes the upload guard. Either way the
    /// notifier hears about the outcome; a rejection leaves the session untouched.
    pub fn attach_profile_picture(
        &mut self,
        picture: ProfilePicture,
        notifier: &dyn Notifier,
    ) -> Result<(), SessionError> {
        self.ensure_active(FormStep::PersonalInfo)?;

        if let Err(rejection) = check_profile_picture(&picture) {
            warn!(
                file = %picture.file_name,
                content_type = %picture.content_type,
                size_bytes = picture.size_bytes,
                "profile picture rejected"
            );
            notifier.notify(Notice::error(rejection.to_string()));
            return Err(rejection.into());
        }

        self.personal.profile_picture = Some(picture);
        notifier.notify(Notice::success("Profile picture uploaded successfully"));
        Ok(())
    }

    pub fn remove_profile_picture(&mut self) -> Result<Option<ProfilePicture>, SessionError> {
        Ok(self.personal_mut()?.profile_picture.take())
    }

    /// Changing the department clears the manager, whose choices are scoped to it.
    pub fn select_department(
        &mut self,
        department: Option<Department>,
    ) -> Result<(), SessionError> {
        let job = self.job_mut()?;
        if job.department != department {
            job.department = department;
            job.manager.clear();
        }
        Ok(())
    }

    pub fn set_position_title(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.job_mut()?.position_title = value.into();
        Ok(())
    }

    pub fn set_start_date(&mut self, value: Option<NaiveDate>) -> Result<(), SessionError> {
        self.job_mut()?.start_date = value;
        Ok(())
    }

    /// Changing the job type clears the salary, whose unit switches between annual and hourly.
    pub fn select_job_type(&mut self, job_type: Option<JobType>) -> Result<(), SessionError> {
        let job = self.job_mut()?;
        if job.job_type != job_type {
            job.job_type = job_type;
            job.salary.clear();
        }
        Ok(())
    }

    pub fn set_salary(&mut self, raw: &str) -> Result<(), SessionError> {
        self.job_mut()?.salary = normalize_amount(raw);
        Ok(())
    }

    pub fn set_manager(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.job_mut()?.manager = value.into();
        Ok(())
    }

    /// Returns whether the skill is selected afterwards. Deselecting discards its experience.
    pub fn toggle_skill(&mut self, skill: Skill) -> Result<bool, SessionError> {
        Ok(self.skills_mut()?.primary_skills.toggle(skill))
    }

    pub fn set_skill_experience(
        &mut self,
        skill: Skill,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        let skills = self.skills_mut()?;
        if skills.primary_skills.set_experience(skill, value) {
            Ok(())
        } else {
            Err(SessionError::SkillNotSelected(skill))
        }
    }

    pub fn set_working_hours_start(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.skills_mut()?.working_hours.start = value.into();
        Ok(())
    }

    pub fn set_working_hours_end(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.skills_mut()?.working_hours.end = value.into();
        Ok(())
    }

    pub fn set_remote_preference(&mut self, percent: i64) -> Result<(), SessionError> {
        self.skills_mut()?.remote_preference = RemotePreference::new(percent);
        Ok(())
    }

    /// Keeps at most 500 characters.
    pub fn set_extra_notes(&mut self, value: &str) -> Result<(), SessionError> {
        self.skills_mut()?.extra_notes = truncate_chars(value, EXTRA_NOTES_MAX_CHARS);
        Ok(())
    }
}
