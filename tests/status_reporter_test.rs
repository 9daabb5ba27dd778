use std::sync::Arc;
use std::time::{Duration, Instant};

use tablecsv::application::services::{JobStatusTracker, ProcessClock, StatusReporter};
use tablecsv::domain::{JobDirection, short_duration};

#[test]
fn given_ninety_minutes_when_formatting_then_trailing_seconds_elided() {
    assert_eq!(short_duration(Duration::from_secs(90 * 60)), "1h30m");
}

#[test]
fn given_exact_hour_when_formatting_then_trailing_minutes_elided() {
    assert_eq!(short_duration(Duration::from_secs(60 * 60)), "1h");
}

#[test]
fn given_seconds_only_when_formatting_then_seconds_shown() {
    assert_eq!(short_duration(Duration::from_secs(45)), "45s");
}

#[test]
fn given_exact_minutes_when_formatting_then_trailing_seconds_elided() {
    assert_eq!(short_duration(Duration::from_secs(120)), "2m");
}

#[test]
fn given_zero_when_formatting_then_zero_seconds() {
    assert_eq!(short_duration(Duration::ZERO), "0s");
}

#[test]
fn given_hour_with_seconds_when_formatting_then_zero_minutes_kept() {
    assert_eq!(short_duration(Duration::from_secs(3605)), "1h0m5s");
}

#[test]
fn given_long_uptime_when_formatting_then_hours_keep_growing() {
    assert_eq!(short_duration(Duration::from_secs(26 * 3600 + 61)), "26h1m1s");
}

#[test]
fn given_sub_second_remainder_when_formatting_then_rounds_to_nearest_second() {
    assert_eq!(short_duration(Duration::from_millis(44_499)), "44s");
    assert_eq!(short_duration(Duration::from_millis(44_500)), "45s");
    assert_eq!(short_duration(Duration::from_millis(59_600)), "1m");
}

#[test]
fn given_fresh_clock_when_reporting_then_idle_with_short_uptime() {
    let tracker = Arc::new(JobStatusTracker::new());
    let reporter = StatusReporter::new(tracker, ProcessClock::start());

    let report = reporter.report();

    assert_eq!(report.dump_status, "Idle!");
    assert_eq!(report.import_status, "Idle!");
    assert!(report.uptime.ends_with('s'));
}

#[test]
fn given_clock_started_ninety_minutes_ago_when_reporting_then_uptime_is_short_form() {
    let started = Instant::now()
        .checked_sub(Duration::from_secs(90 * 60))
        .unwrap();
    let reporter = StatusReporter::new(
        Arc::new(JobStatusTracker::new()),
        ProcessClock::started_at(started),
    );

    let report = reporter.report();

    assert_eq!(report.uptime, "1h30m");
}

#[test]
fn given_jobs_in_flight_when_reporting_then_statuses_reflect_tracker() {
    let tracker = Arc::new(JobStatusTracker::new());
    let reporter = StatusReporter::new(Arc::clone(&tracker), ProcessClock::start());

    tracker.begin(JobDirection::Dump, "out.csv");
    let import = tracker.begin(JobDirection::Import, "in.csv");
    tracker.fail_if_owner(&import, "import file not found: in.csv");

    let report = reporter.report();

    assert_eq!(report.dump_status, "Dump in progress!");
    assert_eq!(report.import_status, "Idle!");
    assert_eq!(
        report.import_error.as_deref(),
        Some("import file not found: in.csv")
    );
}

#[test]
fn given_report_when_serializing_then_uses_pascal_case_and_omits_absent_errors() {
    let tracker = Arc::new(JobStatusTracker::new());
    let reporter = StatusReporter::new(tracker, ProcessClock::start());

    let json = serde_json::to_value(reporter.report()).unwrap();

    assert_eq!(json["DumpStatus"], "Idle!");
    assert_eq!(json["ImportStatus"], "Idle!");
    assert!(json["Uptime"].is_string());
    assert!(json.get("DumpError").is_none());
    assert!(json.get("ImportError").is_none());
}
