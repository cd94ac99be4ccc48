//! Integration tests for the periodic refresh timer.
//!
//! Time is paused so timer ticks are deterministic.

mod common;

use common::*;
use statuswatch::config::MAX_INTERVAL_SECONDS;
use statuswatch::events::SilentAlertSink;
use statuswatch::refresh::SchedulerError;
use statuswatch::status::Severity;
use statuswatch::store::MemoryStore;
use std::sync::Arc;
use std::time::Duration;

fn scripted() -> Arc<ScriptedProbe> {
    let probe = Arc::new(ScriptedProbe::new());
    probe.set("payments", Severity::Ok, "Fine");
    probe
}

async fn settle() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}

#[tokio::test(start_paused = true)]
async fn test_start_refreshes_immediately_then_periodically() {
    let probe = scripted();
    let dashboard = make_dashboard(vec![make_source("payments")], probe.clone());

    dashboard.scheduler.start().unwrap();
    settle().await;
    assert_eq!(probe.calls(), 1);
    assert!(dashboard.scheduler.is_running());
    assert_eq!(dashboard.scheduler.interval(), Some(Duration::from_secs(60)));

    tokio::time::sleep(Duration::from_secs(125)).await;
    assert_eq!(probe.calls(), 3);

    dashboard.scheduler.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_set_interval_restarts_and_persists() {
    let probe = scripted();
    let dashboard = make_dashboard(vec![make_source("payments")], probe.clone());

    dashboard.scheduler.start().unwrap();
    settle().await;
    assert_eq!(probe.calls(), 1);

    dashboard.scheduler.set_interval(10).unwrap();
    assert_eq!(dashboard.store.settings().refresh_interval, 10);
    assert_eq!(dashboard.scheduler.interval(), Some(Duration::from_secs(10)));

    // no immediate pass after a change
    settle().await;
    assert_eq!(probe.calls(), 1);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(probe.calls(), 2);

    // only one timer is live: 30s at 10s means 3 more passes
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(probe.calls(), 5);

    dashboard.scheduler.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_zero_interval_is_rejected() {
    let dashboard = make_dashboard(vec![make_source("payments")], scripted());

    dashboard.scheduler.start().unwrap();
    let result = dashboard.scheduler.set_interval(0);

    assert!(matches!(result, Err(SchedulerError::InvalidInterval(0))));
    assert_eq!(dashboard.store.settings().refresh_interval, 60);
    assert_eq!(dashboard.scheduler.interval(), Some(Duration::from_secs(60)));

    dashboard.scheduler.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_oversized_interval_is_rejected_without_side_effects() {
    let probe = scripted();
    let dashboard = make_dashboard(vec![make_source("payments")], probe.clone());

    dashboard.scheduler.start().unwrap();
    settle().await;

    for seconds in [u64::MAX, MAX_INTERVAL_SECONDS + 1] {
        assert!(matches!(
            dashboard.scheduler.set_interval(seconds),
            Err(SchedulerError::InvalidInterval(s)) if s == seconds
        ));
    }

    // old timer and stored interval untouched
    assert_eq!(dashboard.store.settings().refresh_interval, 60);
    assert!(dashboard.scheduler.is_running());
    assert_eq!(dashboard.scheduler.interval(), Some(Duration::from_secs(60)));

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(probe.calls(), 2);

    // the lock is still usable
    dashboard.scheduler.set_interval(MAX_INTERVAL_SECONDS).unwrap();
    assert_eq!(
        dashboard.scheduler.interval(),
        Some(Duration::from_secs(MAX_INTERVAL_SECONDS))
    );

    dashboard.scheduler.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_set_interval_without_timer_only_persists() {
    let probe = scripted();
    let dashboard = make_dashboard(vec![make_source("payments")], probe.clone());

    dashboard.scheduler.set_interval(5).unwrap();

    assert_eq!(dashboard.store.settings().refresh_interval, 5);
    assert!(!dashboard.scheduler.is_running());
    assert_eq!(dashboard.scheduler.interval(), None);

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(probe.calls(), 0);

    // picked up by the next start
    dashboard.scheduler.start().unwrap();
    assert_eq!(dashboard.scheduler.interval(), Some(Duration::from_secs(5)));
    dashboard.scheduler.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_set_interval_after_shutdown_does_not_restart() {
    let probe = scripted();
    let dashboard = make_dashboard(vec![make_source("payments")], probe.clone());

    dashboard.scheduler.start().unwrap();
    settle().await;
    dashboard.shutdown.cancel();
    settle().await;

    dashboard.scheduler.set_interval(10).unwrap();
    assert!(!dashboard.scheduler.is_running());

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(probe.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stop_halts_refreshes() {
    let probe = scripted();
    let dashboard = make_dashboard(vec![make_source("payments")], probe.clone());

    dashboard.scheduler.start().unwrap();
    settle().await;
    dashboard.scheduler.stop().await;

    assert!(!dashboard.scheduler.is_running());
    assert_eq!(dashboard.scheduler.interval(), None);

    tokio::time::sleep(Duration::from_secs(300)).await;
    assert_eq!(probe.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_token_stops_timer() {
    let probe = scripted();
    let dashboard = make_dashboard(vec![make_source("payments")], probe.clone());

    dashboard.scheduler.start().unwrap();
    settle().await;
    dashboard.shutdown.cancel();
    settle().await;

    assert!(!dashboard.scheduler.is_running());
    tokio::time::sleep(Duration::from_secs(300)).await;
    assert_eq!(probe.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_start_uses_stored_interval() {
    let kv = Arc::new(MemoryStore::new());
    let probe = scripted();

    let first = make_dashboard_with(
        make_config(vec![make_source("payments")]),
        kv.clone(),
        probe.clone(),
        Arc::new(SilentAlertSink),
    );
    first.scheduler.start().unwrap();
    first.scheduler.set_interval(15).unwrap();
    first.scheduler.stop().await;

    let second = make_dashboard_with(
        make_config(vec![make_source("payments")]),
        kv,
        probe,
        Arc::new(SilentAlertSink),
    );
    second.scheduler.start().unwrap();
    assert_eq!(second.scheduler.interval(), Some(Duration::from_secs(15)));
    second.scheduler.stop().await;
}
