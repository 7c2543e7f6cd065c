//! 工单仓储接口

use async_trait::async_trait;
use errors::AppResult;

use crate::domain::entities::{NewWorkOrder, WorkOrder, WorkOrderChanges};
use crate::domain::value_objects::WorkOrderId;

/// 工单仓储接口
///
/// 每个写操作在单个事务内完成，失败时回滚
#[async_trait]
pub trait WorkOrderRepository: Send + Sync {
    /// 创建工单
    ///
    /// 工单号已存在时返回 `AppError::Conflict`，不写入任何数据
    async fn create(&self, work_order: &NewWorkOrder) -> AppResult<WorkOrder>;

    /// 部分更新工单
    ///
    /// 工单不存在时返回 `AppError::NotFound`
    async fn update(&self, id: WorkOrderId, changes: &WorkOrderChanges) -> AppResult<()>;

    /// 根据 ID 查找工单
    async fn find_by_id(&self, id: WorkOrderId) -> AppResult<Option<WorkOrder>>;
}
