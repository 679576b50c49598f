use std::cell::RefCell;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::OnboardingConfig;
use crate::error::AppError;

use super::domain::{
    Department, ErrorMap, JobInfo, OnboardingDraft, PersonalInfo, ProfilePicture, SkillsInfo,
};
use super::draft::DraftError;
use super::review::OnboardingReview;
use super::rules::{format_phone_progressive, is_valid_phone, validate_start_date};
use super::session::{FormSession, FormStep, Transition};
use super::steps::{validate_step1, validate_step2, validate_step3};
use super::upload::{check_profile_picture, Notice, Notifier};

/// Router builder exposing the validation rules to a browser presentation layer.
pub fn onboarding_router(config: OnboardingConfig) -> Router {
    Router::new()
        .route(
            "/api/v1/onboarding/steps/personal-info/validate",
            post(personal_info_handler),
        )
        .route(
            "/api/v1/onboarding/steps/job-details/validate",
            post(job_details_handler),
        )
        .route(
            "/api/v1/onboarding/steps/skills/validate",
            post(skills_handler),
        )
        .route("/api/v1/onboarding/phone/format", post(phone_format_handler))
        .route(
            "/api/v1/onboarding/start-date/validate",
            post(start_date_handler),
        )
        .route(
            "/api/v1/onboarding/profile-picture/check",
            post(profile_picture_handler),
        )
        .route("/api/v1/onboarding/review", post(review_handler))
        .with_state(config)
}

#[derive(Debug, Deserialize)]
pub struct StepRequest<T> {
    pub record: T,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepValidationView {
    pub step: FormStep,
    pub valid: bool,
    pub errors: ErrorMap,
}

#[derive(Debug, Deserialize)]
pub struct PhoneFormatRequest {
    pub raw: String,
}

#[derive(Debug, Serialize)]
pub struct PhoneFormatView {
    pub formatted: String,
    pub complete: bool,
}

#[derive(Debug, Deserialize)]
pub struct StartDateRequest {
    #[serde(default)]
    pub department: Option<Department>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct RuleCheckView {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub draft: OnboardingDraft,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ReviewView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<OnboardingReview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<StepValidationView>,
    pub notices: Vec<Notice>,
}

fn step_response(step: FormStep, errors: ErrorMap) -> Response {
    let valid = errors.is_empty();
    let status = if valid {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (
        status,
        Json(StepValidationView {
            step,
            valid,
            errors,
        }),
    )
        .into_response()
}

fn rule_response(error: Option<String>) -> Response {
    let status = if error.is_none() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (
        status,
        Json(RuleCheckView {
            valid: error.is_none(),
            error,
        }),
    )
        .into_response()
}

pub(crate) async fn personal_info_handler(
    State(config): State<OnboardingConfig>,
    Json(request): Json<StepRequest<PersonalInfo>>,
) -> Response {
    let today = request.today.unwrap_or_else(|| config.today());
    step_response(
        FormStep::PersonalInfo,
        validate_step1(&request.record, today),
    )
}

pub(crate) async fn job_details_handler(
    State(config): State<OnboardingConfig>,
    Json(request): Json<StepRequest<JobInfo>>,
) -> Response {
    let today = request.today.unwrap_or_else(|| config.today());
    step_response(FormStep::JobDetails, validate_step2(&request.record, today))
}

pub(crate) async fn skills_handler(Json(request): Json<StepRequest<SkillsInfo>>) -> Response {
    step_response(
        FormStep::SkillsPreferences,
        validate_step3(&request.record),
    )
}

pub(crate) async fn phone_format_handler(
    Json(request): Json<PhoneFormatRequest>,
) -> Json<PhoneFormatView> {
    let formatted = format_phone_progressive(&request.raw);
    let complete = is_valid_phone(&formatted);
    Json(PhoneFormatView {
        formatted,
        complete,
    })
}

pub(crate) async fn start_date_handler(
    State(config): State<OnboardingConfig>,
    Json(request): Json<StartDateRequest>,
) -> Response {
    let today = request.today.unwrap_or_else(|| config.today());
    let error = validate_start_date(request.department, request.start_date, today)
        .err()
        .map(|violation| violation.to_string());
    rule_response(error)
}

pub(crate) async fn profile_picture_handler(Json(picture): Json<ProfilePicture>) -> Response {
    let error = check_profile_picture(&picture)
        .err()
        .map(|rejection| rejection.to_string());
    rule_response(error)
}

/// Collects notices raised while replaying a draft so they can be returned to the caller.
#[derive(Default)]
struct CollectingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

/// Replays a full draft through the state machine and returns the review snapshot.
///
/// The body is parsed here rather than by the `Json` extractor so that a malformed
/// draft is reported as a draft error.
pub(crate) async fn review_handler(
    State(config): State<OnboardingConfig>,
    body: Bytes,
) -> Result<Response, AppError> {
    let request: ReviewRequest = serde_json::from_slice(&body).map_err(DraftError::from)?;
    let today = request.today.unwrap_or_else(|| config.today());
    let notifier = CollectingNotifier::default();
    let mut session = FormSession::from_draft(request.draft, &notifier);

    let mut blocked = None;
    while session.current_step() != FormStep::Review {
        if let Transition::Blocked { step, errors } = session.next(today) {
            blocked = Some(StepValidationView {
                step,
                valid: false,
                errors,
            });
            break;
        }
    }

    let status = if blocked.is_some() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };

    let view = ReviewView {
        review: session.review(),
        blocked,
        notices: notifier.notices.into_inner(),
    };
    Ok((status, Json(view)).into_response())
}
