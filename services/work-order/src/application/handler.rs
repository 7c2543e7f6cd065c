//! Business logic handler

use std::sync::Arc;

use errors::{AppError, AppResult};
use metrics::counter;
use tracing::{error, info};

use crate::domain::entities::{WorkOrder, WorkOrderChanges};
use crate::domain::repositories::WorkOrderRepository;
use crate::domain::value_objects::WorkOrderId;

use super::commands::{CreateWorkOrderCommand, UpdateWorkOrderCommand};
use super::queries::GetWorkOrderQuery;

/// 更新结果：只回显请求中提供的字段，不回读数据库
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedWorkOrder {
    pub id: WorkOrderId,
    pub changes: WorkOrderChanges,
}

pub struct ServiceHandler {
    work_order_repo: Arc<dyn WorkOrderRepository>,
}

impl ServiceHandler {
    pub fn new(work_order_repo: Arc<dyn WorkOrderRepository>) -> Self {
        Self { work_order_repo }
    }

    /// 创建工单
    pub async fn create_work_order(&self, cmd: CreateWorkOrderCommand) -> AppResult<WorkOrder> {
        info!(
            work_order_number = %cmd.work_order.work_order_number,
            "Creating work order"
        );

        let result = match cmd.validate() {
            Ok(()) => self.work_order_repo.create(&cmd.work_order).await,
            Err(e) => Err(e),
        };
        record_outcome("create", &result);

        let work_order = result.map_err(|e| classify(e, "Failed to create work order"))?;

        info!(id = %work_order.id, "Work order created");
        Ok(work_order)
    }

    /// 部分更新工单
    pub async fn update_work_order(&self, cmd: UpdateWorkOrderCommand) -> AppResult<UpdatedWorkOrder> {
        info!(
            id = %cmd.id,
            fields = ?cmd.changes.present_fields(),
            "Updating work order"
        );

        let result = self.work_order_repo.update(cmd.id, &cmd.changes).await;
        record_outcome("update", &result);
        result.map_err(|e| classify(e, "Failed to update the work order"))?;

        info!(id = %cmd.id, "Work order updated");
        Ok(UpdatedWorkOrder {
            id: cmd.id,
            changes: cmd.changes,
        })
    }

    /// 获取工单
    pub async fn get_work_order(&self, query: GetWorkOrderQuery) -> AppResult<WorkOrder> {
        info!(id = %query.id, "Getting work order");

        let result = self
            .work_order_repo
            .find_by_id(query.id)
            .await
            .and_then(|found| found.ok_or_else(|| AppError::not_found("Work order not found")));
        record_outcome("get", &result);

        result.map_err(|e| classify(e, "Failed to get work order"))
    }
}

/// 存储层错误统一转为 Internal，其余分类原样返回
fn classify(err: AppError, message: &str) -> AppError {
    match err {
        AppError::Database(detail) => {
            error!(error = %detail, "{}", message);
            AppError::internal(message)
        }
        other => other,
    }
}

fn record_outcome<T>(operation: &'static str, result: &AppResult<T>) {
    let outcome = match result {
        Ok(_) => "success",
        Err(AppError::Conflict(_)) => "conflict",
        Err(AppError::NotFound(_)) => "not_found",
        Err(AppError::Validation(_)) => "validation",
        Err(AppError::Internal(_) | AppError::Database(_)) => "error",
    };
    counter!("work_orders_operations_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
}
