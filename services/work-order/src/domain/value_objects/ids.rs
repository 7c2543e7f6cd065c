//! 强类型 ID 定义

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 工单 ID，由数据库自增生成
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct WorkOrderId(pub i64);

impl WorkOrderId {
    pub fn value(self) -> i64 {
        self.0
    }
}
