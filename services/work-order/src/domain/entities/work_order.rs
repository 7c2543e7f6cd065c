//! 工单实体

use crate::domain::value_objects::{Field, Timestamp, WorkOrderId};

/// 工单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOrder {
    pub id: WorkOrderId,
    /// 工单号，全局唯一，创建后不可修改
    pub work_order_number: String,
    pub created_by: String,
    pub assigned_to: String,
    pub room: String,
    pub started_at: Timestamp,
    pub finished_at: Timestamp,
    pub work_type: String,
    pub status: String,
}

/// 待创建的工单，除 `id` 外全部必填
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkOrder {
    pub work_order_number: String,
    pub created_by: String,
    pub assigned_to: String,
    pub room: String,
    pub started_at: Timestamp,
    pub finished_at: Timestamp,
    pub work_type: String,
    pub status: String,
}

/// 工单的部分更新，`Absent` 表示保持原值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkOrderChanges {
    pub created_by: Field<String>,
    pub assigned_to: Field<String>,
    pub room: Field<String>,
    pub started_at: Field<Timestamp>,
    pub finished_at: Field<Timestamp>,
    pub work_type: Field<String>,
    pub status: Field<String>,
}

impl WorkOrder {
    pub fn from_new(id: WorkOrderId, new: NewWorkOrder) -> Self {
        Self {
            id,
            work_order_number: new.work_order_number,
            created_by: new.created_by,
            assigned_to: new.assigned_to,
            room: new.room,
            started_at: new.started_at,
            finished_at: new.finished_at,
            work_type: new.work_type,
            status: new.status,
        }
    }

    /// 按 coalesce 语义应用变更：只覆盖提供了值的字段
    pub fn apply_changes(&mut self, changes: &WorkOrderChanges) {
        fn coalesce<T: Clone>(target: &mut T, field: &Field<T>) {
            if let Some(value) = field.as_option() {
                *target = value.clone();
            }
        }

        coalesce(&mut self.created_by, &changes.created_by);
        coalesce(&mut self.assigned_to, &changes.assigned_to);
        coalesce(&mut self.room, &changes.room);
        coalesce(&mut self.started_at, &changes.started_at);
        coalesce(&mut self.finished_at, &changes.finished_at);
        coalesce(&mut self.work_type, &changes.work_type);
        coalesce(&mut self.status, &changes.status);
    }
}

impl WorkOrderChanges {
    /// 本次请求显式提供的字段名（用于日志）
    pub fn present_fields(&self) -> Vec<&'static str> {
        [
            ("created_by", self.created_by.is_present()),
            ("assigned_to", self.assigned_to.is_present()),
            ("room", self.room.is_present()),
            ("started_at", self.started_at.is_present()),
            ("finished_at", self.finished_at.is_present()),
            ("type", self.work_type.is_present()),
            ("status", self.status.is_present()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}
