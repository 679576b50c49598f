use std::sync::Mutex;

use axum::response::Response;
use chrono::{Duration, NaiveDate};
use serde_json::Value;

use crate::workflows::onboarding::domain::{
    Department, JobInfo, JobType, OnboardingDraft, PersonalInfo, PrimarySkills, ProfilePicture,
    RemotePreference, Skill, SkillsInfo, WorkingHours,
};
use crate::workflows::onboarding::session::{FormSession, FormStep, Transition};
use crate::workflows::onboarding::upload::{Notice, Notifier};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// A Monday.
pub(super) fn today() -> NaiveDate {
    date(2025, 3, 3)
}

pub(super) fn next_friday() -> NaiveDate {
    date(2025, 3, 7)
}

pub(super) fn personal_info() -> PersonalInfo {
    PersonalInfo {
        full_name: "Jane Doe".to_string(),
        email: "jane@co.com".to_string(),
        phone_number: "1-555-123-4567".to_string(),
        date_of_birth: Some(date(2005, 3, 3)),
        profile_picture: None,
    }
}

pub(super) fn job_info() -> JobInfo {
    JobInfo {
        department: Some(Department::Engineering),
        position_title: "Backend Engineer".to_string(),
        start_date: Some(today() + Duration::days(14)),
        job_type: Some(JobType::FullTime),
        salary: "95000".to_string(),
        manager: "Priya Raman".to_string(),
    }
}

pub(super) fn skills_info() -> SkillsInfo {
    let mut primary_skills = PrimarySkills::new();
    for (skill, years) in [(Skill::Python, "4"), (Skill::Django, "2.5"), (Skill::Css, "0")] {
        primary_skills.toggle(skill);
        primary_skills.set_experience(skill, years);
    }

    SkillsInfo {
        primary_skills,
        working_hours: WorkingHours {
            start: "09:00".to_string(),
            end: "17:30".to_string(),
        },
        remote_preference: RemotePreference::new(60),
        extra_notes: "Prefers async standups.".to_string(),
    }
}

pub(super) fn draft() -> OnboardingDraft {
    OnboardingDraft {
        personal_info: personal_info(),
        job_info: job_info(),
        skills_info: skills_info(),
    }
}

pub(super) fn picture(content_type: &str, size_bytes: u64) -> ProfilePicture {
    ProfilePicture {
        file_name: "jane.png".to_string(),
        content_type: content_type.to_string(),
        size_bytes,
    }
}

/// Session advanced to `target` using the valid fixtures.
pub(super) fn session_at(target: FormStep) -> FormSession {
    let notifier = MemoryNotifier::default();
    let mut session = FormSession::from_draft(draft(), &notifier);
    while session.current_step() != target {
        match session.next(today()) {
            Transition::Advanced { .. } => {}
            other => panic!("fixture session failed to advance: {other:?}"),
        }
    }
    session
}

#[derive(Default)]
pub(super) struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub(super) fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notifier mutex poisoned").clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice);
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
