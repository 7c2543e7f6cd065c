//! 请求与响应结构

use serde::{Deserialize, Serialize};

use crate::application::UpdatedWorkOrder;
use crate::application::commands::CreateWorkOrderCommand;
use crate::domain::entities::{NewWorkOrder, WorkOrder, WorkOrderChanges};
use crate::domain::value_objects::{Field, Timestamp};

/// POST /work-orders 请求体，所有字段必填
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkOrderRequest {
    pub work_order_number: String,
    pub created_by: String,
    pub assigned_to: String,
    pub room: String,
    pub started_at: Timestamp,
    pub finished_at: Timestamp,
    #[serde(rename = "type")]
    pub work_type: String,
    pub status: String,
}

/// PUT /work-orders/{id} 请求体
///
/// 只允许可变字段；`work_order_number` 等未知键会被拒绝
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateWorkOrderRequest {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub created_by: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub assigned_to: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub room: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub started_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub finished_at: Field<Timestamp>,
    #[serde(default, rename = "type", skip_serializing_if = "Field::is_absent")]
    pub work_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub status: Field<String>,
}

/// 完整工单
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderResponse {
    pub id: i64,
    pub work_order_number: String,
    pub created_by: String,
    pub assigned_to: String,
    pub room: String,
    pub started_at: Timestamp,
    pub finished_at: Timestamp,
    #[serde(rename = "type")]
    pub work_type: String,
    pub status: String,
}

/// 更新响应：`id` 加上请求中提供的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateWorkOrderResponse {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub created_by: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub assigned_to: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub room: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub started_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub finished_at: Field<Timestamp>,
    #[serde(default, rename = "type", skip_serializing_if = "Field::is_absent")]
    pub work_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub status: Field<String>,
}

impl From<CreateWorkOrderRequest> for CreateWorkOrderCommand {
    fn from(req: CreateWorkOrderRequest) -> Self {
        Self {
            work_order: NewWorkOrder {
                work_order_number: req.work_order_number,
                created_by: req.created_by,
                assigned_to: req.assigned_to,
                room: req.room,
                started_at: req.started_at,
                finished_at: req.finished_at,
                work_type: req.work_type,
                status: req.status,
            },
        }
    }
}

impl From<UpdateWorkOrderRequest> for WorkOrderChanges {
    fn from(req: UpdateWorkOrderRequest) -> Self {
        Self {
            created_by: req.created_by,
            assigned_to: req.assigned_to,
            room: req.room,
            started_at: req.started_at,
            finished_at: req.finished_at,
            work_type: req.work_type,
            status: req.status,
        }
    }
}

impl From<WorkOrder> for WorkOrderResponse {
    fn from(work_order: WorkOrder) -> Self {
        Self {
            id: work_order.id.value(),
            work_order_number: work_order.work_order_number,
            created_by: work_order.created_by,
            assigned_to: work_order.assigned_to,
            room: work_order.room,
            started_at: work_order.started_at,
            finished_at: work_order.finished_at,
            work_type: work_order.work_type,
            status: work_order.status,
        }
    }
}

impl From<UpdatedWorkOrder> for UpdateWorkOrderResponse {
    fn from(updated: UpdatedWorkOrder) -> Self {
        let changes = updated.changes;
        Self {
            id: updated.id.value(),
            created_by: changes.created_by,
            assigned_to: changes.assigned_to,
            room: changes.room,
            started_at: changes.started_at,
            finished_at: changes.finished_at,
            work_type: changes.work_type,
            status: changes.status,
        }
    }
}
