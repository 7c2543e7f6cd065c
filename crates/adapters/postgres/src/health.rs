//! PostgreSQL 健康检查模块
//!
//! 提供连接池级别的健康检查

use std::time::Instant;

use serde::Serialize;
use sqlx::PgPool;
use tracing::debug;

use crate::check_connection;

/// 健康检查结果
#[derive(Debug, Clone)]
pub struct HealthCheckResult {
    /// 是否健康
    pub healthy: bool,
    /// 延迟（毫秒）
    pub latency_ms: Option<u64>,
    /// 错误信息
    pub error: Option<String>,
    /// 连接池状态
    pub pool_status: PoolHealthStatus,
}

/// 连接池健康状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolHealthStatus {
    /// 连接池大小
    pub size: u32,
    /// 空闲连接数
    pub idle: u32,
    /// 活跃连接数
    pub active: u32,
}

impl PoolHealthStatus {
    pub fn from_pool(pool: &PgPool) -> Self {
        let size = pool.size();
        let idle = pool.num_idle() as u32;
        Self {
            size,
            idle,
            active: size.saturating_sub(idle),
        }
    }
}

/// 执行一次 `SELECT 1` 检查
pub async fn check_health(pool: &PgPool) -> HealthCheckResult {
    let start = Instant::now();
    let result = check_connection(pool).await;
    let pool_status = PoolHealthStatus::from_pool(pool);

    match result {
        Ok(()) => {
            let latency_ms = start.elapsed().as_millis() as u64;
            debug!(latency_ms, "PostgreSQL health check passed");
            HealthCheckResult {
                healthy: true,
                latency_ms: Some(latency_ms),
                error: None,
                pool_status,
            }
        }
        Err(e) => HealthCheckResult {
            healthy: false,
            latency_ms: None,
            error: Some(e.to_string()),
            pool_status,
        },
    }
}
