//! 工单命令

use errors::{AppError, AppResult};

use crate::domain::entities::{NewWorkOrder, WorkOrderChanges};
use crate::domain::value_objects::WorkOrderId;

/// 创建工单命令
#[derive(Debug, Clone)]
pub struct CreateWorkOrderCommand {
    pub work_order: NewWorkOrder,
}

impl CreateWorkOrderCommand {
    pub fn validate(&self) -> AppResult<()> {
        if self.work_order.work_order_number.trim().is_empty() {
            return Err(AppError::validation("work_order_number must not be blank"));
        }
        Ok(())
    }
}

/// 更新工单命令
#[derive(Debug, Clone)]
pub struct UpdateWorkOrderCommand {
    pub id: WorkOrderId,
    pub changes: WorkOrderChanges,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(number: &str) -> CreateWorkOrderCommand {
        CreateWorkOrderCommand {
            work_order: NewWorkOrder {
                work_order_number: number.to_string(),
                created_by: "alice".to_string(),
                assigned_to: "bob".to_string(),
                room: "101".to_string(),
                started_at: "2024-01-01T09:00:00".parse().unwrap(),
                finished_at: "2024-01-01T10:00:00".parse().unwrap(),
                work_type: "repair".to_string(),
                status: "open".to_string(),
            },
        }
    }

    #[test]
    fn test_validate_accepts_number() {
        assert!(command("WO-1").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_number() {
        let err = command("   ").validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
