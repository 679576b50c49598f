//! Employee onboarding form: field rules, per-step validators and the step state machine.
//!
//! Everything here is synchronous and pure apart from the [`Notifier`] hook used when a
//! profile picture upload is accepted or rejected.

pub mod domain;
pub mod draft;
pub mod review;
pub mod router;
pub mod rules;
pub mod session;
pub mod steps;
pub mod upload;

#[cfg(test)]
mod tests;

pub use domain::{
    experience_field, Department, ErrorMap, JobInfo, JobType, OnboardingDraft, PersonalInfo,
    PrimarySkills, ProfilePicture, RemotePreference, Skill, SkillEntry, SkillsInfo, WorkingHours,
    EXTRA_NOTES_MAX_CHARS,
};
pub use draft::{DraftError, DraftLoader};
pub use review::OnboardingReview;
pub use router::onboarding_router;
pub use rules::{format_phone_progressive, validate_start_date, DateRuleViolation};
pub use session::{FormSession, FormStep, SessionError, Transition};
pub use steps::{validate_step1, validate_step2, validate_step3, MINIMUM_SKILLS};
pub use upload::{
    check_profile_picture, Notice, NoticeLevel, Notifier, SilentNotifier, UploadRejection,
    MAX_PROFILE_PICTURE_BYTES,
};
