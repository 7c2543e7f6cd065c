//! PostgreSQL repository implementation

use adapter_postgres::{TransactionManager, database_error, is_unique_violation};
use async_trait::async_trait;
use bootstrap::DbQueryTimer;
use errors::{AppError, AppResult};
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::entities::{NewWorkOrder, WorkOrder, WorkOrderChanges};
use crate::domain::repositories::WorkOrderRepository;
use crate::domain::value_objects::WorkOrderId;

use super::rows::WorkOrderRow;

const TABLE: &str = "work_orders";
const DUPLICATE_NUMBER: &str = "Duplicate work order number";
const NOT_FOUND: &str = "Work order not found";

pub struct PostgresWorkOrderRepository {
    tx_manager: TransactionManager,
}

impl PostgresWorkOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            tx_manager: TransactionManager::new(pool),
        }
    }

    async fn insert_in_tx(
        tx: &mut Transaction<'static, Postgres>,
        work_order: &NewWorkOrder,
    ) -> AppResult<WorkOrder> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM work_orders WHERE work_order_number = $1)",
        )
        .bind(&work_order.work_order_number)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| database_error("Failed to check work order number", e))?;

        if exists.0 {
            return Err(AppError::conflict(DUPLICATE_NUMBER));
        }

        let row = sqlx::query_as::<_, WorkOrderRow>(
            r#"
            INSERT INTO work_orders (
                work_order_number, created_by, assigned_to, room,
                started_at, finished_at, "type", status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, work_order_number, created_by, assigned_to, room,
                      started_at, finished_at, "type", status
            "#,
        )
        .bind(&work_order.work_order_number)
        .bind(&work_order.created_by)
        .bind(&work_order.assigned_to)
        .bind(&work_order.room)
        .bind(work_order.started_at.as_naive())
        .bind(work_order.finished_at.as_naive())
        .bind(&work_order.work_type)
        .bind(&work_order.status)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| {
            // 并发创建越过了存在性检查，由唯一约束兜底
            if is_unique_violation(&e) {
                AppError::conflict(DUPLICATE_NUMBER)
            } else {
                database_error("Failed to insert work order", e)
            }
        })?;

        Ok(row.into())
    }

    async fn update_in_tx(
        tx: &mut Transaction<'static, Postgres>,
        id: WorkOrderId,
        changes: &WorkOrderChanges,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE work_orders SET
                created_by = COALESCE($1, created_by),
                assigned_to = COALESCE($2, assigned_to),
                room = COALESCE($3, room),
                started_at = COALESCE($4, started_at),
                finished_at = COALESCE($5, finished_at),
                "type" = COALESCE($6, "type"),
                status = COALESCE($7, status)
            WHERE id = $8
            "#,
        )
        .bind(changes.created_by.as_option())
        .bind(changes.assigned_to.as_option())
        .bind(changes.room.as_option())
        .bind(changes.started_at.as_option().map(|t| t.as_naive()))
        .bind(changes.finished_at.as_option().map(|t| t.as_naive()))
        .bind(changes.work_type.as_option())
        .bind(changes.status.as_option())
        .bind(id.value())
        .execute(&mut **tx)
        .await
        .map_err(|e| database_error("Failed to update work order", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(NOT_FOUND));
        }

        Ok(())
    }
}

#[async_trait]
impl WorkOrderRepository for PostgresWorkOrderRepository {
    async fn create(&self, work_order: &NewWorkOrder) -> AppResult<WorkOrder> {
        let timer = DbQueryTimer::new("insert", TABLE);

        let mut tx = self.tx_manager.begin().await?;
        let result = Self::insert_in_tx(&mut tx, work_order).await;
        let result = TransactionManager::finish(tx, result).await;

        timer.finish(result.is_ok());
        result
    }

    async fn update(&self, id: WorkOrderId, changes: &WorkOrderChanges) -> AppResult<()> {
        let timer = DbQueryTimer::new("update", TABLE);

        let mut tx = self.tx_manager.begin().await?;
        let result = Self::update_in_tx(&mut tx, id, changes).await;
        let result = TransactionManager::finish(tx, result).await;

        timer.finish(result.is_ok());
        result
    }

    async fn find_by_id(&self, id: WorkOrderId) -> AppResult<Option<WorkOrder>> {
        let timer = DbQueryTimer::new("select", TABLE);

        let result = sqlx::query_as::<_, WorkOrderRow>(
            r#"
            SELECT id, work_order_number, created_by, assigned_to, room,
                   started_at, finished_at, "type", status
            FROM work_orders
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(self.tx_manager.pool())
        .await
        .map_err(|e| database_error("Failed to query work order", e));

        timer.finish(result.is_ok());
        Ok(result?.map(WorkOrder::from))
    }
}
