//! 数据库行结构与转换

use chrono::NaiveDateTime;
use sqlx::FromRow;

use crate::domain::entities::WorkOrder;
use crate::domain::value_objects::{Timestamp, WorkOrderId};

#[derive(Debug, FromRow)]
pub struct WorkOrderRow {
    pub id: i64,
    pub work_order_number: String,
    pub created_by: String,
    pub assigned_to: String,
    pub room: String,
    pub started_at: NaiveDateTime,
    pub finished_at: NaiveDateTime,
    #[sqlx(rename = "type")]
    pub work_type: String,
    pub status: String,
}

impl From<WorkOrderRow> for WorkOrder {
    fn from(row: WorkOrderRow) -> Self {
        Self {
            id: WorkOrderId(row.id),
            work_order_number: row.work_order_number,
            created_by: row.created_by,
            assigned_to: row.assigned_to,
            room: row.room,
            started_at: Timestamp::new(row.started_at),
            finished_at: Timestamp::new(row.finished_at),
            work_type: row.work_type,
            status: row.status,
        }
    }
}
