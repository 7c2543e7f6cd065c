//! 应用层流程测试（内存仓储）

mod common;

use std::sync::Arc;

use common::{InMemoryWorkOrderRepository, sample_new_work_order};
use errors::AppError;
use work_order::application::ServiceHandler;
use work_order::application::commands::{CreateWorkOrderCommand, UpdateWorkOrderCommand};
use work_order::application::queries::GetWorkOrderQuery;
use work_order::domain::entities::WorkOrderChanges;
use work_order::domain::value_objects::{Field, WorkOrderId};

fn setup() -> (Arc<InMemoryWorkOrderRepository>, ServiceHandler) {
    let repo = Arc::new(InMemoryWorkOrderRepository::new());
    let handler = ServiceHandler::new(repo.clone());
    (repo, handler)
}

fn create_cmd(number: &str) -> CreateWorkOrderCommand {
    CreateWorkOrderCommand {
        work_order: sample_new_work_order(number),
    }
}

#[tokio::test]
async fn test_create_assigns_fresh_positive_ids() {
    let (_repo, handler) = setup();

    let first = handler.create_work_order(create_cmd("WO-1")).await.unwrap();
    let second = handler.create_work_order(create_cmd("WO-2")).await.unwrap();

    assert!(first.id.value() > 0);
    assert!(second.id.value() > 0);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_duplicate_number_is_conflict_and_writes_nothing() {
    let (repo, handler) = setup();
    handler.create_work_order(create_cmd("WO-1")).await.unwrap();
    assert_eq!(repo.count(), 1);

    let err = handler
        .create_work_order(create_cmd("WO-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(repo.count(), 1);
}

#[tokio::test]
async fn test_blank_number_is_rejected_before_store() {
    let (repo, handler) = setup();

    let err = handler.create_work_order(create_cmd("  ")).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn test_get_returns_fields_as_submitted() {
    let (_repo, handler) = setup();
    let submitted = sample_new_work_order("WO-1");

    let created = handler
        .create_work_order(CreateWorkOrderCommand {
            work_order: submitted.clone(),
        })
        .await
        .unwrap();
    let fetched = handler
        .get_work_order(GetWorkOrderQuery { id: created.id })
        .await
        .unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.work_order_number, submitted.work_order_number);
    assert_eq!(fetched.created_by, submitted.created_by);
    assert_eq!(fetched.assigned_to, submitted.assigned_to);
    assert_eq!(fetched.room, submitted.room);
    assert_eq!(fetched.started_at, submitted.started_at);
    assert_eq!(fetched.finished_at, submitted.finished_at);
    assert_eq!(fetched.work_type, submitted.work_type);
    assert_eq!(fetched.status, submitted.status);
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let (_repo, handler) = setup();

    let err = handler
        .get_work_order(GetWorkOrderQuery {
            id: WorkOrderId(999999),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_update_one_field_keeps_the_rest() {
    let (_repo, handler) = setup();
    let created = handler.create_work_order(create_cmd("WO-1")).await.unwrap();

    let changes = WorkOrderChanges {
        status: Field::Present("closed".to_string()),
        ..Default::default()
    };
    let updated = handler
        .update_work_order(UpdateWorkOrderCommand {
            id: created.id,
            changes: changes.clone(),
        })
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.changes, changes);

    let fetched = handler
        .get_work_order(GetWorkOrderQuery { id: created.id })
        .await
        .unwrap();
    let mut expected = created.clone();
    expected.status = "closed".to_string();
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn test_update_missing_is_not_found_and_writes_nothing() {
    let (repo, handler) = setup();
    let created = handler.create_work_order(create_cmd("WO-1")).await.unwrap();

    let err = handler
        .update_work_order(UpdateWorkOrderCommand {
            id: WorkOrderId(created.id.value() + 100),
            changes: WorkOrderChanges {
                room: Field::Present("999".to_string()),
                ..Default::default()
            },
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(repo.get(created.id.value()).unwrap(), created);
    assert_eq!(repo.count(), 1);
}

#[tokio::test]
async fn test_store_failures_become_internal() {
    let (repo, handler) = setup();
    let created = handler.create_work_order(create_cmd("WO-1")).await.unwrap();
    repo.set_failing(true);

    let err = handler
        .create_work_order(create_cmd("WO-2"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Internal(ref msg) if msg == "Failed to create work order"));

    let err = handler
        .update_work_order(UpdateWorkOrderCommand {
            id: created.id,
            changes: WorkOrderChanges::default(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Internal(ref msg) if msg == "Failed to update the work order"));

    let err = handler
        .get_work_order(GetWorkOrderQuery { id: created.id })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Internal(ref msg) if msg == "Failed to get work order"));
}
