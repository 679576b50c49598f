use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use onboarding::config::AppConfig;
use onboarding::error::AppError;
use onboarding::workflows::onboarding::{Department, Notice, NoticeLevel, Notifier};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Forwards upload notices to the log and echoes them to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => {
                info!(message = %notice.message, "upload accepted");
                println!("  [ok] {}", notice.message);
            }
            NoticeLevel::Error => {
                warn!(message = %notice.message, "upload rejected");
                println!("  [error] {}", notice.message);
            }
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_department(raw: &str) -> Result<Department, String> {
    Department::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = Department::ALL.iter().map(|d| d.label()).collect();
        format!("unknown department '{raw}' (expected one of {})", known.join(", "))
    })
}

/// Resolves the evaluation day: explicit flag, then the configured reference date, then the clock.
pub(crate) fn resolve_today(explicit: Option<NaiveDate>) -> Result<NaiveDate, AppError> {
    match explicit {
        Some(today) => Ok(today),
        None => Ok(AppConfig::load()?.onboarding.today()),
    }
}
