use super::common::*;
use chrono::Duration;

use crate::workflows::onboarding::domain::{Department, JobType, Skill, EXTRA_NOTES_MAX_CHARS};
use crate::workflows::onboarding::session::{FormSession, FormStep, SessionError, Transition};
use crate::workflows::onboarding::upload::{
    NoticeLevel, SilentNotifier, UploadRejection, MAX_PROFILE_PICTURE_BYTES,
};

#[test]
fn new_session_starts_empty_on_step_one() {
    let session = FormSession::new();
    assert_eq!(session.current_step(), FormStep::PersonalInfo);
    assert!(session.errors().is_empty());
    assert!(session.review().is_none());
}

#[test]
fn next_is_blocked_until_step_validates() {
    let mut session = FormSession::new();
    session.set_full_name("Jane").expect("editable");

    match session.next(today()) {
        Transition::Blocked { step, errors } => {
            assert_eq!(step, FormStep::PersonalInfo);
            assert!(errors.contains("full_name"));
            assert_eq!(&errors, session.errors());
        }
        other => panic!("expected blocked transition, got {other:?}"),
    }
    assert_eq!(session.current_step(), FormStep::PersonalInfo);
    assert_eq!(session.personal().full_name, "Jane");
}

#[test]
fn successful_next_advances_and_clears_errors() {
    let mut session = FormSession::new();
    session.next(today());
    assert!(!session.errors().is_empty());

    session.set_full_name("Jane Doe").expect("editable");
    session.set_email("jane@co.com").expect("editable");
    session.set_phone_number("15551234567").expect("editable");
    session
        .set_date_of_birth(Some(date(2000, 1, 1)))
        .expect("editable");

    assert_eq!(session.personal().phone_number, "1-555-123-4567");
    assert_eq!(
        session.next(today()),
        Transition::Advanced {
            from: FormStep::PersonalInfo,
            to: FormStep::JobDetails
        }
    );
    assert!(session.errors().is_empty());
}

#[test]
fn full_walk_reaches_review_with_all_records() {
    let session = session_at(FormStep::Review);
    let review = session.review().expect("review available");

    assert_eq!(review.personal_info, personal_info());
    assert_eq!(review.job_info, job_info());
    assert_eq!(review.skills_info, skills_info());
    assert_eq!(review.salary_unit.label(), "annual");
}

#[test]
fn next_on_review_is_a_no_op() {
    let mut session = session_at(FormStep::Review);
    assert_eq!(
        session.next(today()),
        Transition::Unchanged {
            step: FormStep::Review
        }
    );
}

#[test]
fn back_keeps_data_and_skips_validation() {
    let mut session = session_at(FormStep::JobDetails);
    session.set_position_title("").expect("editable");
    session.next(today());
    assert!(!session.errors().is_empty());

    assert_eq!(
        session.back(),
        Transition::Retreated {
            from: FormStep::JobDetails,
            to: FormStep::PersonalInfo
        }
    );
    assert!(session.errors().is_empty());
    assert_eq!(session.personal(), &personal_info());
    assert_eq!(session.job().position_title, "");

    assert_eq!(
        session.back(),
        Transition::Unchanged {
            step: FormStep::PersonalInfo
        }
    );
}

#[test]
fn review_is_read_only() {
    let mut session = session_at(FormStep::Review);
    assert_eq!(
        session.set_full_name("Someone Else"),
        Err(SessionError::ReviewIsReadOnly)
    );
    assert_eq!(
        session.toggle_skill(Skill::Html),
        Err(SessionError::ReviewIsReadOnly)
    );
}

#[test]
fn edits_are_limited_to_the_active_step() {
    let mut session = FormSession::new();
    assert_eq!(
        session.select_department(Some(Department::Sales)),
        Err(SessionError::StepNotActive {
            requested: FormStep::JobDetails,
            current: FormStep::PersonalInfo,
        })
    );
    assert_eq!(session.job().department, None);
}

#[test]
fn changing_department_clears_manager() {
    let mut session = session_at(FormStep::JobDetails);
    assert_eq!(session.job().manager, "Priya Raman");

    session
        .select_department(Some(Department::Engineering))
        .expect("editable");
    assert_eq!(session.job().manager, "Priya Raman");

    session
        .select_department(Some(Department::Finance))
        .expect("editable");
    assert_eq!(session.job().department, Some(Department::Finance));
    assert!(session.job().manager.is_empty());
}

#[test]
fn changing_job_type_clears_salary() {
    let mut session = session_at(FormStep::JobDetails);

    session
        .select_job_type(Some(JobType::PartTime))
        .expect("editable");
    assert!(session.job().salary.is_empty());
    assert!(matches!(
        session.next(today()),
        Transition::Blocked { .. }
    ));
    assert_eq!(session.errors().get("salary"), Some("Salary is required"));

    session.set_salary("$75").expect("editable");
    assert_eq!(session.job().salary, "75");
    assert_eq!(session.next(today()).step(), FormStep::SkillsPreferences);
}

#[test]
fn deselecting_a_skill_discards_experience() {
    let mut session = session_at(FormStep::SkillsPreferences);

    assert_eq!(session.toggle_skill(Skill::Python), Ok(false));
    assert!(!session.skills().primary_skills.contains(Skill::Python));

    assert_eq!(session.toggle_skill(Skill::Python), Ok(true));
    assert_eq!(
        session.skills().primary_skills.experience(Skill::Python),
        Some("")
    );
    assert_eq!(session.skills().primary_skills.len(), 3);
}

#[test]
fn experience_requires_selected_skill() {
    let mut session = session_at(FormStep::SkillsPreferences);
    assert_eq!(
        session.set_skill_experience(Skill::Html, "3"),
        Err(SessionError::SkillNotSelected(Skill::Html))
    );
}

#[test]
fn notes_and_remote_preference_are_bounded_at_input() {
    let mut session = session_at(FormStep::SkillsPreferences);

    session.set_extra_notes(&"x".repeat(640)).expect("editable");
    assert_eq!(
        session.skills().extra_notes.chars().count(),
        EXTRA_NOTES_MAX_CHARS
    );

    session.set_remote_preference(140).expect("editable");
    assert_eq!(session.skills().remote_preference.percent(), 100);
    session.set_remote_preference(-5).expect("editable");
    assert_eq!(session.skills().remote_preference.percent(), 0);

    assert_eq!(session.next(today()).step(), FormStep::Review);
}

#[test]
fn rejected_upload_notifies_and_leaves_state_untouched() {
    let notifier = MemoryNotifier::default();
    let mut session = FormSession::new();

    let result = session.attach_profile_picture(
        picture("image/png", MAX_PROFILE_PICTURE_BYTES + 1),
        &notifier,
    );
    assert!(matches!(
        result,
        Err(SessionError::Upload(UploadRejection::TooLarge { .. }))
    ));
    assert!(session.personal().profile_picture.is_none());
    assert!(session.errors().is_empty());

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].message, "Please upload an image smaller than 2MB");
}

#[test]
fn accepted_upload_is_stored() {
    let notifier = MemoryNotifier::default();
    let mut session = FormSession::new();

    session
        .attach_profile_picture(picture("image/jpeg", 512 * 1024), &notifier)
        .expect("jpeg accepted");
    assert_eq!(
        session
            .personal()
            .profile_picture
            .as_ref()
            .map(|p| p.size_bytes),
        Some(512 * 1024)
    );
    assert_eq!(notifier.notices()[0].level, NoticeLevel::Success);

    let removed = session.remove_profile_picture().expect("editable");
    assert!(removed.is_some());
    assert!(session.personal().profile_picture.is_none());
}

#[test]
fn draft_with_bad_picture_drops_it() {
    let mut draft = draft();
    draft.personal_info.profile_picture = Some(picture("application/pdf", 1024));

    let notifier = MemoryNotifier::default();
    let session = FormSession::from_draft(draft, &notifier);

    assert!(session.personal().profile_picture.is_none());
    assert_eq!(notifier.notices()[0].message, "Please upload a JPG or PNG image");
}

#[test]
fn draft_values_go_through_input_normalizers() {
    let mut draft = draft();
    draft.personal_info.phone_number = "(1) 555 123 4567".to_string();
    draft.job_info.salary = "$95,000".to_string();
    draft.skills_info.extra_notes = "é".repeat(700);

    let session = FormSession::from_draft(draft, &SilentNotifier);
    assert_eq!(session.personal().phone_number, "1-555-123-4567");
    assert_eq!(session.job().salary, "95000");
    assert_eq!(session.skills().extra_notes.chars().count(), 500);
}

// Earlier steps are not re-validated when a later step advances. A start date
// that was acceptable when step 2 was left stays accepted even once it has
// slipped into the past by the time the review is reached.
#[test]
fn advancing_does_not_revalidate_earlier_steps() {
    let mut draft = draft();
    draft.job_info.start_date = Some(today());

    let mut session = FormSession::from_draft(draft, &SilentNotifier);
    assert_eq!(session.next(today()).step(), FormStep::JobDetails);
    assert_eq!(session.next(today()).step(), FormStep::SkillsPreferences);

    let a_week_later = today() + Duration::days(7);
    assert_eq!(session.next(a_week_later).step(), FormStep::Review);

    let review = session.review().expect("review reached");
    assert_eq!(review.job_info.start_date, Some(today()));
}

// Going back and editing an earlier step only re-gates that step itself.
#[test]
fn edits_after_back_are_checked_when_leaving_that_step_again() {
    let mut session = session_at(FormStep::SkillsPreferences);
    session.back();
    session.back();
    session.set_email("not-an-email").expect("editable");

    match session.next(today()) {
        Transition::Blocked { step, errors } => {
            assert_eq!(step, FormStep::PersonalInfo);
            assert_eq!(errors.get("email"), Some("Invalid email"));
        }
        other => panic!("expected blocked transition, got {other:?}"),
    }
}
