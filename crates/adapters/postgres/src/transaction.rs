//! PostgreSQL 事务管理模块

use errors::{AppError, AppResult};
use sqlx::{PgPool, Postgres, Transaction};
use tracing::warn;

/// 事务管理器
#[derive(Clone)]
pub struct TransactionManager {
    pool: PgPool,
}

impl TransactionManager {
    /// 创建新的事务管理器
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 获取连接池引用
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// 开始事务
    pub async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {}", e)))
    }

    /// 提交事务
    pub async fn commit(tx: Transaction<'static, Postgres>) -> AppResult<()> {
        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit transaction: {}", e)))
    }

    /// 回滚事务
    pub async fn rollback(tx: Transaction<'static, Postgres>) -> AppResult<()> {
        tx.rollback()
            .await
            .map_err(|e| AppError::database(format!("Failed to rollback transaction: {}", e)))
    }

    /// 根据结果提交或回滚
    ///
    /// 回滚失败只记录日志，返回原始错误
    pub async fn finish<T>(tx: Transaction<'static, Postgres>, result: AppResult<T>) -> AppResult<T> {
        match result {
            Ok(value) => {
                Self::commit(tx).await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = Self::rollback(tx).await {
                    warn!(error = %rollback_err, "Rollback failed");
                }
                Err(err)
            }
        }
    }
}
