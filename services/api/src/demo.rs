use crate::infra::{parse_date, parse_department, resolve_today, ConsoleNotifier};
use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use clap::Args;
use onboarding::error::AppError;
use onboarding::workflows::onboarding::{
    format_phone_progressive, validate_start_date, validate_step2, validate_step3, Department,
    DraftLoader, ErrorMap, FormSession, FormStep, JobType, OnboardingReview, ProfilePicture,
    SessionError, Skill, Transition,
};
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Path to a saved onboarding draft (JSON)
    #[arg(long)]
    pub(crate) draft: PathBuf,
    /// Evaluation date for age and start-date rules (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the review as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct FormatPhoneArgs {
    /// Raw phone input, any characters allowed
    pub(crate) raw: String,
}

#[derive(Args, Debug)]
pub(crate) struct StartDateArgs {
    /// Proposed start date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: NaiveDate,
    /// Department used for the weekend exclusion rule
    #[arg(long, value_parser = parse_department)]
    pub(crate) department: Option<Department>,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let ValidateArgs { draft, today, json } = args;
    let today = resolve_today(today)?;
    let loaded = DraftLoader::from_path(&draft)?;

    println!("Onboarding draft {} (evaluated {today})", draft.display());
    let mut session = FormSession::from_draft(loaded, &ConsoleNotifier);

    while session.current_step() != FormStep::Review {
        match session.next(today) {
            Transition::Advanced { from, .. } => println!("- {from}: ok"),
            Transition::Blocked { step, errors } => {
                println!("- {step}: {} issue(s)", errors.len());
                print_errors(&errors);
                print_remaining(&session, today);
                return Err(AppError::Incomplete {
                    step,
                    issues: errors.len(),
                });
            }
            Transition::Retreated { .. } | Transition::Unchanged { .. } => break,
        }
    }

    if let Some(review) = session.review() {
        print_review(&review, json);
    }
    Ok(())
}

pub(crate) fn run_format_phone(args: FormatPhoneArgs) {
    println!("{}", format_phone_progressive(&args.raw));
}

pub(crate) fn run_start_date(args: StartDateArgs) -> Result<(), AppError> {
    let StartDateArgs {
        date,
        department,
        today,
    } = args;
    let today = resolve_today(today)?;

    let department_label = department.map(|d| d.label()).unwrap_or("no department");
    match validate_start_date(department, date, today) {
        Ok(()) => println!(
            "{date} ({}) is a valid start date for {department_label}",
            date.weekday()
        ),
        Err(violation) => println!("{date} rejected for {department_label}: {violation}"),
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = resolve_today(args.today)?;
    println!("Employee onboarding demo (today is {today})");

    let mut session = FormSession::new();
    if let Err(err) = walk_demo(&mut session, today) {
        println!("  Demo stopped: {err}");
        return Ok(());
    }

    if let Some(review) = session.review() {
        print_review(&review, false);
    }
    Ok(())
}

fn walk_demo(session: &mut FormSession, today: NaiveDate) -> Result<(), SessionError> {
    println!("\n{}", session.current_step());
    report(session.next(today));

    session.set_full_name("Jane Doe")?;
    session.set_email("jane@co.com")?;
    for keystrokes in ["1", "1555", "1555123", "15551234567"] {
        session.set_phone_number(keystrokes)?;
        println!("  phone input {keystrokes:>11} -> {}", session.personal().phone_number);
    }
    let date_of_birth = today
        .checked_sub_months(Months::new(12 * 30))
        .unwrap_or(today);
    session.set_date_of_birth(Some(date_of_birth))?;

    let oversized = ProfilePicture {
        file_name: "jane.png".to_string(),
        content_type: "image/png".to_string(),
        size_bytes: 3 * 1024 * 1024,
    };
    if session
        .attach_profile_picture(oversized, &ConsoleNotifier)
        .is_err()
    {
        debug!("oversized demo picture rejected");
    }
    let picture = ProfilePicture {
        file_name: "jane.jpg".to_string(),
        content_type: "image/jpeg".to_string(),
        size_bytes: 420 * 1024,
    };
    session.attach_profile_picture(picture, &ConsoleNotifier)?;
    report(session.next(today));

    println!("\n{}", session.current_step());
    let friday = next_weekday(today, Weekday::Fri);
    session.select_department(Some(Department::Hr))?;
    session.set_position_title("People Partner")?;
    session.set_start_date(Some(friday))?;
    session.select_job_type(Some(JobType::PartTime))?;
    session.set_salary("$250")?;
    session.set_manager("Priya Raman")?;
    report(session.next(today));

    println!("  switching department to Engineering clears the manager");
    session.select_department(Some(Department::Engineering))?;
    println!("  manager now {:?}", session.job().manager);
    session.set_salary("75")?;
    report(session.next(today));

    println!("\n{}", session.current_step());
    for skill in [Skill::Python, Skill::Django] {
        session.toggle_skill(skill)?;
    }
    session.set_skill_experience(Skill::Python, "4")?;
    session.set_skill_experience(Skill::Django, "2")?;
    report(session.next(today));

    println!("  stepping back keeps entered values");
    report(session.back());
    report(session.next(today));

    session.toggle_skill(Skill::Css)?;
    session.set_skill_experience(Skill::Css, "1.5")?;
    session.set_working_hours_start("09:00")?;
    session.set_working_hours_end("17:30")?;
    session.set_remote_preference(60)?;
    session.set_extra_notes("Prefers Tuesday onboarding sessions")?;
    report(session.next(today));

    Ok(())
}

fn next_weekday(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut date = from + Duration::days(1);
    while date.weekday() != weekday {
        date += Duration::days(1);
    }
    date
}

fn report(transition: Transition) {
    match transition {
        Transition::Advanced { from, to } => println!("  next: {from} -> {to}"),
        Transition::Retreated { from, to } => println!("  back: {from} -> {to}"),
        Transition::Blocked { step, errors } => {
            println!("  next blocked on {step}");
            print_errors(&errors);
        }
        Transition::Unchanged { step } => println!("  stayed on {step}"),
    }
}

fn print_errors(errors: &ErrorMap) {
    for (field, message) in errors.iter() {
        println!("    - {field}: {message}");
    }
}

/// Previews the steps after the blocking one so a draft's full set of issues is visible.
fn print_remaining(session: &FormSession, today: NaiveDate) {
    let skipped = [
        (
            FormStep::JobDetails,
            validate_step2(session.job(), today),
        ),
        (
            FormStep::SkillsPreferences,
            validate_step3(session.skills()),
        ),
    ];

    let current = session.current_step().number();
    for (step, errors) in skipped {
        if step.number() <= current || errors.is_empty() {
            continue;
        }
        println!("- {step}: {} issue(s) (not yet reached)", errors.len());
        print_errors(&errors);
    }
}

fn print_review(review: &OnboardingReview, json: bool) {
    if json {
        match review.to_json_pretty() {
            Ok(body) => println!("{body}"),
            Err(err) => println!("Review payload unavailable: {err}"),
        }
        return;
    }

    println!("\nReview");
    for line in review.summary_lines() {
        println!("  {line}");
    }
}
