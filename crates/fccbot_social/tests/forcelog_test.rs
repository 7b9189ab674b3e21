//! `/forcelog` behaviour against a fake platform.

mod common;

use common::{FakeClient, FakeOracle, Failures, Harness, command_event};
use fccbot_core::{AuditCategory, CommandOption};
use fccbot_social::{CommandOutcome, DispatchOutcome};

#[tokio::test]
async fn test_forcelog_acknowledges_then_audits_verbatim() {
    let harness = Harness::new(FakeClient::new(), FakeOracle::Allow);

    let outcome = harness
        .dispatcher
        .dispatch(&command_event(
            "forcelog",
            vec![CommandOption::new("message", "restarting at 5pm | maintenance")],
        ))
        .await;

    assert_eq!(outcome, DispatchOutcome::Handled(CommandOutcome::Completed));
    assert_eq!(harness.responses(), vec!["Log made in log channel".to_string()]);
    let logs = harness.audits_of(AuditCategory::CommandForceLog);
    assert_eq!(logs.len(), 1);
    assert_eq!(
        logs[0].text(),
        "By User nelly: restarting at 5pm | maintenance"
    );
}

#[tokio::test]
async fn test_failed_acknowledgement_suppresses_audit() {
    let failures = Failures {
        respond: true,
        ..Failures::default()
    };
    let harness = Harness::new(FakeClient::new().failing(failures), FakeOracle::Allow);

    let outcome = harness
        .dispatcher
        .dispatch(&command_event(
            "forcelog",
            vec![CommandOption::new("message", "hello")],
        ))
        .await;

    assert_eq!(outcome, DispatchOutcome::Handled(CommandOutcome::Aborted));
    assert!(harness.audits_of(AuditCategory::CommandForceLog).is_empty());
    assert_eq!(harness.audits_of(AuditCategory::Error).len(), 1);
}

#[tokio::test]
async fn test_missing_message_never_reaches_the_platform() {
    let harness = Harness::new(FakeClient::new(), FakeOracle::Allow);

    let outcome = harness
        .dispatcher
        .dispatch(&command_event("forcelog", Vec::new()))
        .await;

    assert_eq!(outcome, DispatchOutcome::Handled(CommandOutcome::Aborted));
    assert!(harness.side_effects().is_empty());
    assert!(harness.audits_of(AuditCategory::CommandForceLog).is_empty());
}
