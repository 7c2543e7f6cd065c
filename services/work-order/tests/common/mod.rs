//! 测试公共工具：内存仓储与样例数据

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use errors::{AppError, AppResult};
use work_order::domain::entities::{NewWorkOrder, WorkOrder, WorkOrderChanges};
use work_order::domain::repositories::WorkOrderRepository;
use work_order::domain::value_objects::WorkOrderId;

#[derive(Default)]
struct Store {
    last_id: i64,
    rows: BTreeMap<i64, WorkOrder>,
}

/// 内存仓储，语义与 PostgreSQL 实现一致
#[derive(Default)]
pub struct InMemoryWorkOrderRepository {
    store: Mutex<Store>,
    failing: AtomicBool,
}

impl InMemoryWorkOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 模拟数据库不可用
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.store.lock().unwrap().rows.len()
    }

    pub fn get(&self, id: i64) -> Option<WorkOrder> {
        self.store.lock().unwrap().rows.get(&id).cloned()
    }

    fn check_available(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::database("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl WorkOrderRepository for InMemoryWorkOrderRepository {
    async fn create(&self, work_order: &NewWorkOrder) -> AppResult<WorkOrder> {
        self.check_available()?;
        let mut store = self.store.lock().unwrap();

        if store
            .rows
            .values()
            .any(|row| row.work_order_number == work_order.work_order_number)
        {
            return Err(AppError::conflict("Duplicate work order number"));
        }

        store.last_id += 1;
        let id = store.last_id;
        let created = WorkOrder::from_new(WorkOrderId(id), work_order.clone());
        store.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: WorkOrderId, changes: &WorkOrderChanges) -> AppResult<()> {
        self.check_available()?;
        let mut store = self.store.lock().unwrap();

        let row = store
            .rows
            .get_mut(&id.value())
            .ok_or_else(|| AppError::not_found("Work order not found"))?;
        row.apply_changes(changes);
        Ok(())
    }

    async fn find_by_id(&self, id: WorkOrderId) -> AppResult<Option<WorkOrder>> {
        self.check_available()?;
        Ok(self.store.lock().unwrap().rows.get(&id.value()).cloned())
    }
}

/// 样例工单（WO-1 / alice / bob / 101 / repair / open）
pub fn sample_new_work_order(number: &str) -> NewWorkOrder {
    NewWorkOrder {
        work_order_number: number.to_string(),
        created_by: "alice".to_string(),
        assigned_to: "bob".to_string(),
        room: "101".to_string(),
        started_at: "2024-01-01T09:00:00".parse().unwrap(),
        finished_at: "2024-01-01T10:00:00".parse().unwrap(),
        work_type: "repair".to_string(),
        status: "open".to_string(),
    }
}
