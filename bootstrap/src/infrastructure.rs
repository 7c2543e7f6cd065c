//! 基础设施资源管理
//!
//! 启动时获取、注入到各组件、关闭时释放

use std::time::Duration;

use adapter_postgres::{PoolHealthStatus, PostgresConfig, close_pool, create_pool};
use config::AppConfig;
use errors::AppResult;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

/// 基础设施资源容器
///
/// 克隆只复制连接池句柄，底层连接共享
#[derive(Clone)]
pub struct Infrastructure {
    /// PostgreSQL 连接池
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        let pg_config = PostgresConfig::new(config.database.url.expose_secret())
            .with_max_connections(config.database.max_connections)
            .with_acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs));

        let postgres_pool = create_pool(&pg_config).await?;
        info!(
            "PostgreSQL connection pool created (max_connections: {})",
            config.database.max_connections
        );

        Ok(Self { postgres_pool })
    }

    /// 获取 PostgreSQL 连接池
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    /// 获取 PostgreSQL 连接池状态
    pub fn postgres_pool_status(&self) -> PoolHealthStatus {
        PoolHealthStatus::from_pool(&self.postgres_pool)
    }

    /// 释放资源
    pub async fn shutdown(self) {
        close_pool(&self.postgres_pool).await;
    }
}
