//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use adapter_postgres::{PoolHealthStatus, check_health};
use serde::Serialize;
use sqlx::PgPool;

use crate::http_metrics::MetricsRecorder;

/// 健康检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 探测耗时（毫秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    /// 连接池状态
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolHealthStatus>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            message: None,
            latency_ms: None,
            pool: None,
        }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "unhealthy".to_string(),
            message: Some(message.into()),
            latency_ms: None,
            pool: None,
        }
    }

    pub fn with_latency(mut self, latency_ms: Option<u64>) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn with_pool(mut self, pool: PoolHealthStatus) -> Self {
        self.pool = Some(pool);
        self
    }
}

/// 健康检查器
#[derive(Clone)]
pub struct HealthChecker {
    pool: PgPool,
}

impl HealthChecker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 执行存活检查（liveness）
    ///
    /// 只检查服务是否在运行，不检查依赖
    pub async fn liveness(&self) -> HealthStatus {
        HealthStatus::healthy()
    }

    /// 执行就绪检查（readiness）
    pub async fn readiness(&self) -> HealthStatus {
        let mut status = HealthStatus::healthy();

        let result = check_health(&self.pool).await;
        let check = if result.healthy {
            ComponentHealth::healthy("postgres")
        } else {
            ComponentHealth::unhealthy(
                "postgres",
                result.error.unwrap_or_else(|| "unknown error".to_string()),
            )
        };
        status.add_check(
            check
                .with_latency(result.latency_ms)
                .with_pool(result.pool_status),
        );

        status
    }
}

#[derive(Clone)]
struct HealthState {
    checker: HealthChecker,
    metrics: Option<MetricsRecorder>,
}

/// 运维端点路由
pub fn health_routes(checker: HealthChecker, metrics: Option<MetricsRecorder>) -> Router {
    let has_metrics = metrics.is_some();
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler));

    let router = if has_metrics {
        router.route("/metrics", get(metrics_handler))
    } else {
        router
    };

    router.with_state(HealthState { checker, metrics })
}

/// Liveness 端点处理器
async fn health_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let status = state.checker.liveness().await;
    (StatusCode::OK, Json(status))
}

/// Readiness 端点处理器
async fn ready_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let status = state.checker.readiness().await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// Metrics 端点处理器
async fn metrics_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let body = state.metrics.map(|m| m.render()).unwrap_or_default();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
}
