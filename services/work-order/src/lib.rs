//! work-order Service - 工单管理
//!
//! 单表 `work_orders` 的创建、部分更新与查询

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
