//! 工单查询

use crate::domain::value_objects::WorkOrderId;

/// 按 ID 获取工单
#[derive(Debug, Clone, Copy)]
pub struct GetWorkOrderQuery {
    pub id: WorkOrderId,
}
