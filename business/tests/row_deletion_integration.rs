//! Integration tests for the row deletion flow.
//!
//! These tests bind a `RowDeletionController` to an in-memory table and run
//! deletes against a mock backend:
//! - Endpoint selection by record kind
//! - Payload built from the clicked row
//! - Row removal on success, notification on rejection
//! - Silent failure on transport / parse errors

#![cfg(not(target_arch = "wasm32"))]

use std::cell::RefCell;
use std::rc::Rc;

use gatehouse_business::{
    ApiError, BusinessConfig, DELETE_REJECTED_MESSAGE, DeleteOutcome, Notifier, RecordKind,
    RowDeletionController, Table,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }
}

type Controller = RowDeletionController<Rc<Table>, Rc<RecordingNotifier>>;

/// Test context for row deletion tests.
struct RowDeletionTestCtx {
    mock_server: MockServer,
    table: Rc<Table>,
    notifier: Rc<RecordingNotifier>,
}

impl RowDeletionTestCtx {
    fn bind(&self) -> Controller {
        RowDeletionController::bind(
            Rc::clone(&self.table),
            BusinessConfig::new(self.mock_server.uri()),
            Rc::clone(&self.notifier),
        )
    }
}

async fn setup_row_deletion_test(headers: &[&str]) -> RowDeletionTestCtx {
    let _ = env_logger::builder().is_test(true).try_init();

    RowDeletionTestCtx {
        mock_server: MockServer::start().await,
        table: Rc::new(Table::new(headers.iter().copied())),
        notifier: Rc::new(RecordingNotifier::default()),
    }
}

// ===========================================
// Endpoint selection and payload
// ===========================================

#[tokio::test]
async fn test_visitor_row_posts_license_plate_to_delete_visitor() {
    let ctx = setup_row_deletion_test(&["Name", "License Plate", "Exit Time"]).await;
    let row = ctx.table.push_row(["Alice", "XYZ-123", "10:00"]);

    Mock::given(method("POST"))
        .and(path("/delete_visitor"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "license_plate": "XYZ-123",
            "phone_number": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let controller = ctx.bind();
    assert_eq!(controller.kind(), RecordKind::Visitor);

    let outcome = controller.delete_row(row).await;

    assert_eq!(outcome, DeleteOutcome::Removed);
    assert!(!ctx.table.contains(row));
    assert!(ctx.notifier.alerts().is_empty());
}

#[tokio::test]
async fn test_resident_row_posts_phone_number_to_delete_resident() {
    let ctx = setup_row_deletion_test(&["Name", "Phone Number"]).await;
    let row = ctx.table.push_row(["Bob", "555-1234"]);

    Mock::given(method("POST"))
        .and(path("/delete_resident"))
        .and(body_json(json!({
            "license_plate": null,
            "phone_number": "555-1234"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let controller = ctx.bind();
    assert_eq!(controller.kind(), RecordKind::Resident);
    assert_eq!(controller.delete_row(row).await, DeleteOutcome::Removed);
    assert!(ctx.table.is_empty());
}

#[tokio::test]
async fn test_every_delete_on_resident_table_targets_delete_resident() {
    let ctx = setup_row_deletion_test(&[
        "Role",
        "Phone Number",
        "Home Address",
        "Vehicle Type",
        "License Plate",
    ])
    .await;
    let first = ctx
        .table
        .push_row(["Resident", "0901", "12 Elm", "Car", "51A-111"]);
    let second = ctx
        .table
        .push_row(["Admin", "0902", "14 Elm", "Motorbike", "59B-222"]);

    Mock::given(method("POST"))
        .and(path("/delete_resident"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(2)
        .mount(&ctx.mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/delete_visitor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;

    let controller = ctx.bind();
    assert_eq!(
        controller.delete_request(&second).license_plate.as_deref(),
        Some("59B-222")
    );

    assert!(controller.delete_row(first).await.is_removed());
    assert!(controller.delete_row(second).await.is_removed());
    assert!(ctx.table.is_empty());
}

#[tokio::test]
async fn test_explicit_kind_selects_endpoint() {
    let ctx = setup_row_deletion_test(&["Name", "License Plate"]).await;
    let row = ctx.table.push_row(["Eve", "AA-42"]);

    Mock::given(method("POST"))
        .and(path("/delete_visitor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let controller = RowDeletionController::bind_with_kind(
        Rc::clone(&ctx.table),
        RecordKind::Visitor,
        BusinessConfig::new(ctx.mock_server.uri()),
        Rc::clone(&ctx.notifier),
    );

    assert_eq!(controller.delete_row(row).await, DeleteOutcome::Removed);
}

#[tokio::test]
async fn test_table_without_lookup_columns_sends_nulls() {
    let ctx = setup_row_deletion_test(&["Name", "Home Address"]).await;
    let row = ctx.table.push_row(["Frank", "3 Oak"]);

    Mock::given(method("POST"))
        .and(path("/delete_resident"))
        .and(body_json(json!({
            "license_plate": null,
            "phone_number": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let outcome = ctx.bind().delete_row(row).await;

    assert_eq!(outcome, DeleteOutcome::Rejected);
    assert!(ctx.table.contains(row));
}

// ===========================================
// Failure handling
// ===========================================

#[tokio::test]
async fn test_rejection_keeps_row_and_notifies() {
    let ctx = setup_row_deletion_test(&["Name", "License Plate", "Exit Time"]).await;
    let row = ctx.table.push_row(["Alice", "XYZ-123", "10:00"]);

    Mock::given(method("POST"))
        .and(path("/delete_visitor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&ctx.mock_server)
        .await;

    let outcome = ctx.bind().delete_row(row).await;

    assert_eq!(outcome, DeleteOutcome::Rejected);
    assert!(ctx.table.contains(row));
    assert_eq!(ctx.notifier.alerts(), vec![DELETE_REJECTED_MESSAGE.to_owned()]);
}

#[tokio::test]
async fn test_json_error_status_is_a_rejection() {
    let ctx = setup_row_deletion_test(&["Phone Number"]).await;
    let row = ctx.table.push_row(["555-0000"]);

    Mock::given(method("POST"))
        .and(path("/delete_resident"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "success": false })))
        .mount(&ctx.mock_server)
        .await;

    assert_eq!(ctx.bind().delete_row(row).await, DeleteOutcome::Rejected);
    assert_eq!(ctx.notifier.alerts().len(), 1);
}

#[tokio::test]
async fn test_non_json_response_is_logged_only() {
    let ctx = setup_row_deletion_test(&["Phone Number"]).await;
    let row = ctx.table.push_row(["555-0000"]);

    Mock::given(method("POST"))
        .and(path("/delete_resident"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>Please login to access the page.</p>"))
        .mount(&ctx.mock_server)
        .await;

    let outcome = ctx.bind().delete_row(row).await;

    assert!(matches!(
        outcome,
        DeleteOutcome::Failed(ApiError::Parse { status: 200, .. })
    ));
    assert!(ctx.table.contains(row));
    assert!(ctx.notifier.alerts().is_empty());
}

#[tokio::test]
async fn test_transport_failure_is_logged_only() {
    let _ = env_logger::builder().is_test(true).try_init();
    let table = Rc::new(Table::new(["Name", "License Plate", "Exit Time"]));
    let notifier = Rc::new(RecordingNotifier::default());
    let row = table.push_row(["Alice", "XYZ-123", "10:00"]);

    // Nothing listens on the discard port.
    let controller = RowDeletionController::bind(
        Rc::clone(&table),
        BusinessConfig::new("http://127.0.0.1:9"),
        Rc::clone(&notifier),
    );

    let outcome = controller.delete_row(row).await;

    assert!(matches!(outcome, DeleteOutcome::Failed(ApiError::Transport(_))));
    assert!(table.contains(row));
    assert!(notifier.alerts().is_empty());
}

#[tokio::test]
async fn test_controller_stays_usable_after_failure() {
    let ctx = setup_row_deletion_test(&["Phone Number"]).await;
    let first = ctx.table.push_row(["555-0001"]);
    let second = ctx.table.push_row(["555-0002"]);

    Mock::given(method("POST"))
        .and(path("/delete_resident"))
        .and(body_json(json!({ "license_plate": null, "phone_number": "555-0001" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&ctx.mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/delete_resident"))
        .and(body_json(json!({ "license_plate": null, "phone_number": "555-0002" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&ctx.mock_server)
        .await;

    let controller = ctx.bind();

    assert_eq!(controller.delete_row(first).await, DeleteOutcome::Rejected);
    assert_eq!(controller.delete_row(second).await, DeleteOutcome::Removed);
    assert!(ctx.table.contains(first));
    assert!(!ctx.table.contains(second));
}

// ===========================================
// Concurrent deletes
// ===========================================

#[tokio::test]
async fn test_concurrent_deletes_settle_independently() {
    let ctx = setup_row_deletion_test(&["Name", "License Plate", "Exit Time"]).await;
    let slow = ctx.table.push_row(["Alice", "SLOW-1", "10:00"]);
    let fast = ctx.table.push_row(["Bob", "FAST-2", "11:00"]);
    let kept = ctx.table.push_row(["Carol", "KEEP-3", "12:00"]);

    Mock::given(method("POST"))
        .and(path("/delete_visitor"))
        .and(body_json(json!({ "license_plate": "SLOW-1", "phone_number": null })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true }))
                .set_delay(std::time::Duration::from_millis(200)),
        )
        .mount(&ctx.mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/delete_visitor"))
        .and(body_json(json!({ "license_plate": "FAST-2", "phone_number": null })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&ctx.mock_server)
        .await;

    let controller = ctx.bind();
    let (slow_outcome, fast_outcome) =
        tokio::join!(controller.delete_row(slow), controller.delete_row(fast));

    assert_eq!(slow_outcome, DeleteOutcome::Removed);
    assert_eq!(fast_outcome, DeleteOutcome::Removed);
    assert_eq!(ctx.table.len(), 1);
    assert!(ctx.table.contains(kept));
}
