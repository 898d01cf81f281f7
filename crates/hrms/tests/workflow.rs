//! End-to-end flows through the public API.

use chrono::NaiveDate;
use serde_json::{json, Map, Value};

use hrms::admin;
use hrms::config::AnalyticsConfig;
use hrms::models::{FeedbackType, LeaveStatus, LeaveType, LeaveRequest, ReviewStatus};
use hrms::{Analytics, Onboarding, Repositories, Session, Store};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn seeded() -> Store {
    let store = Store::open_in_memory().unwrap();
    assert!(admin::initialize(&store).unwrap());
    store
}

#[test]
fn leave_request_lifecycle_updates_dashboard() {
    let store = seeded();
    let repos = Repositories::new(&store);
    let analytics = Analytics::new(repos, &AnalyticsConfig { placeholder_seed: Some(7) });
    let before = analytics.dashboard_metrics().unwrap();

    let employee = repos.employees.by_employee_id("EMP001").unwrap().unwrap();
    let request = LeaveRequest::new(
        employee.employee_id.clone(),
        employee.name.clone(),
        LeaveType::Vacation,
        date("2024-07-01"),
        date("2024-07-05"),
        "Summer trip",
    );
    let added = repos.leave.file(request, false).unwrap();
    assert_eq!(added.days, 5);
    assert_eq!(added.status, LeaveStatus::Pending);

    let during = analytics.dashboard_metrics().unwrap();
    assert_eq!(during.pending_leave_requests, before.pending_leave_requests + 1);
    assert_eq!(during.pending_actions, before.pending_actions + 1);

    let reviewed = repos
        .leave
        .review(&added.id, LeaveStatus::Approved, "Sarah Wilson", None)
        .unwrap()
        .unwrap();
    assert_eq!(reviewed.reviewed_by.as_deref(), Some("Sarah Wilson"));

    let after = analytics.dashboard_metrics().unwrap();
    assert_eq!(after.pending_leave_requests, before.pending_leave_requests);
}

#[test]
fn employee_update_and_delete_persist() {
    let store = seeded();
    let employees = Repositories::new(&store).employees;

    let mut changes = Map::new();
    changes.insert("position".to_string(), json!("Staff Engineer"));
    changes.insert("salary".to_string(), Value::from(120_000));
    let updated = employees.update("1", &changes).unwrap().unwrap();
    assert_eq!(updated.position, "Staff Engineer");
    assert_eq!(updated.salary, 120_000);
    assert_eq!(employees.get("1").unwrap().unwrap().position, "Staff Engineer");

    assert!(employees.delete("1").unwrap());
    assert!(employees.get("1").unwrap().is_none());
    assert!(!employees.delete("1").unwrap());
}

#[test]
fn review_and_feedback_workflows() {
    let store = seeded();
    let repos = Repositories::new(&store);

    let pending = repos
        .reviews
        .all()
        .unwrap()
        .into_iter()
        .find(|r| !r.status.is_finished())
        .unwrap();
    let rejected = repos
        .reviews
        .reject(&pending.id, Some("Needs more detail".to_string()))
        .unwrap()
        .unwrap();
    assert_eq!(rejected.status, ReviewStatus::Rejected);
    assert_eq!(rejected.rejection_reason.as_deref(), Some("Needs more detail"));

    let accidents = repos.feedback.by_type(FeedbackType::Accident).unwrap();
    assert!(!accidents.is_empty());
    let id = accidents[0].base().id.clone();
    let resolved = repos
        .feedback
        .resolve(&id, Some("Floor mats replaced".to_string()))
        .unwrap()
        .unwrap();
    assert!(resolved.base().status.is_resolved());
    assert_eq!(resolved.base().response.as_deref(), Some("Floor mats replaced"));
}

#[test]
fn session_and_onboarding_survive_clear() {
    let store = seeded();
    let session = Session::new(&store);
    let user = session.login("sarah.wilson@company.com", "").unwrap().unwrap();
    assert!(user.is_hr());

    let onboarding = Onboarding::new(&store);
    assert!(!onboarding.state(&user.id).unwrap().has_completed_onboarding);
    onboarding.skip(&user.id).unwrap();

    admin::clear_all_data(&store).unwrap();

    assert!(session.current_user().unwrap().is_none());
    assert!(onboarding.state(&user.id).unwrap().has_completed_onboarding);
    // Reads fall back to the demo records after a clear.
    assert_eq!(Repositories::new(&store).employees.all().unwrap().len(), 5);
}

#[test]
fn unknown_login_is_rejected() {
    let store = seeded();
    let session = Session::new(&store);
    assert!(session.login("nobody@company.com", "secret").unwrap().is_none());
    assert!(session.current_user().unwrap().is_none());
}

#[test]
fn store_on_disk_keeps_records_between_opens() {
    let dir = std::env::temp_dir().join(format!("hrms-test-{}", std::process::id()));
    let path = dir.join("hrms.db");
    let _ = std::fs::remove_dir_all(&dir);

    {
        let store = Store::open(&path).unwrap();
        admin::seed_demo_data(&store).unwrap();
        Repositories::new(&store).employees.delete("5").unwrap();
    }

    let store = Store::open(&path).unwrap();
    assert!(!admin::initialize(&store).unwrap());
    assert_eq!(Repositories::new(&store).employees.all().unwrap().len(), 4);
    assert!(store.stats().unwrap().total_documents >= 5);

    drop(store);
    let _ = std::fs::remove_dir_all(&dir);
}
