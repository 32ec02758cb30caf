//! Daily rescheduling loop

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Days, NaiveTime, Utc};
use tracing::{error, info};

use crate::orchestrator::{DailyOrchestrator, DailyOutcome};

/// Minutes after UTC midnight at which the daily run fires
pub const REFRESH_MINUTE_OFFSET: u32 = 5;
/// Used when the computed delay is not positive
pub const FALLBACK_DELAY: Duration = Duration::from_secs(60);

/// Time from `now` until the next UTC midnight plus `minute_offset` minutes
pub fn delay_until_next_refresh(now: DateTime<Utc>, minute_offset: u32) -> Duration {
    let next = now
        .date_naive()
        .checked_add_days(Days::new(1))
        .and_then(|day| NaiveTime::from_hms_opt(0, minute_offset, 0).map(|t| day.and_time(t)))
        .map(|naive| naive.and_utc());

    match next.map(|next| next - now) {
        Some(diff) if diff > chrono::Duration::zero() => diff.to_std().unwrap_or(FALLBACK_DELAY),
        _ => FALLBACK_DELAY,
    }
}

/// Sleep until the next refresh, run, and reschedule. Never returns.
pub async fn run_daily_loop(orchestrator: Arc<DailyOrchestrator>) {
    run_on_schedule(move || {
        let orchestrator = Arc::clone(&orchestrator);
        async move { orchestrator.run_today().await }
    })
    .await
}

async fn run_on_schedule<F, Fut>(mut job: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<DailyOutcome>>,
{
    loop {
        let delay = delay_until_next_refresh(Utc::now(), REFRESH_MINUTE_OFFSET);
        info!(
            "Next daily preview check in ~{} minute(s)",
            (delay.as_secs() + 30) / 60
        );
        tokio::time::sleep(delay).await;

        if let Err(e) = job().await {
            error!("Daily preview refresh failed: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreviewConfig;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    #[test]
    fn test_delay_until_five_past_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 23, 0, 0).unwrap();
        assert_eq!(
            delay_until_next_refresh(now, 5),
            Duration::from_secs(65 * 60)
        );
    }

    #[test]
    fn test_delay_just_after_refresh_is_almost_a_day() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 0, 5, 1).unwrap();
        assert_eq!(
            delay_until_next_refresh(now, 5),
            Duration::from_secs(24 * 3600 - 1)
        );
    }

    #[test]
    fn test_delay_crosses_month_and_year() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 12, 0, 0).unwrap();
        assert_eq!(
            delay_until_next_refresh(now, 5),
            Duration::from_secs(12 * 3600 + 5 * 60)
        );
    }

    #[test]
    fn test_invalid_offset_falls_back() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(delay_until_next_refresh(now, 90), FALLBACK_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_run_is_rescheduled() {
        let dir = TempDir::new().unwrap();
        // A regular file where the previews directory should be
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src").join("previews"), "not a dir").unwrap();
        let orchestrator = Arc::new(DailyOrchestrator::new(
            PreviewConfig::from_lookup(dir.path(), |_| None),
            None,
        ));

        let attempts = Arc::new(AtomicUsize::new(0));
        let failures = Arc::new(AtomicUsize::new(0));
        let task = tokio::spawn({
            let attempts = Arc::clone(&attempts);
            let failures = Arc::clone(&failures);
            run_on_schedule(move || {
                let orchestrator = Arc::clone(&orchestrator);
                let attempts = Arc::clone(&attempts);
                let failures = Arc::clone(&failures);
                async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    let result = orchestrator.run_today().await;
                    if result.is_err() {
                        failures.fetch_add(1, Ordering::SeqCst);
                    }
                    result
                }
            })
        });

        // Two full refresh periods, plus slack for the 5 minute offset
        tokio::time::sleep(Duration::from_secs(2 * 24 * 3600 + 3600)).await;
        task.abort();

        assert!(attempts.load(Ordering::SeqCst) >= 2);
        assert_eq!(
            failures.load(Ordering::SeqCst),
            attempts.load(Ordering::SeqCst)
        );
    }
}
