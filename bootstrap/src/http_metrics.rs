//! Metrics 模块
//!
//! HTTP 请求与数据库查询指标，通过 Prometheus 导出

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::warn;

/// Metrics 记录器
#[derive(Clone)]
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 Prometheus recorder，失败时返回 None
    pub fn install() -> Option<Self> {
        match telemetry::init_metrics() {
            Ok(handle) => Some(Self { handle }),
            Err(e) => {
                warn!(error = %e, "Failed to install Prometheus recorder, metrics disabled");
                None
            }
        }
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// 记录 HTTP 请求
pub fn record_http_request(method: &str, path: &str, status: u16, duration_ms: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_ms", &labels).record(duration_ms);
}

/// 记录数据库查询
pub fn record_db_query(operation: &str, table: &str, duration_ms: f64, success: bool) {
    let labels = [
        ("operation", operation.to_string()),
        ("table", table.to_string()),
        ("success", success.to_string()),
    ];
    counter!("db_queries_total", &labels).increment(1);
    histogram!("db_query_duration_ms", &labels).record(duration_ms);
}

/// 数据库查询计时器
pub struct DbQueryTimer {
    start: Instant,
    operation: &'static str,
    table: &'static str,
}

impl DbQueryTimer {
    pub fn new(operation: &'static str, table: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
            table,
        }
    }

    pub fn finish(self, success: bool) {
        let duration = self.start.elapsed().as_secs_f64() * 1000.0;
        record_db_query(self.operation, self.table, duration, success);
    }
}

/// HTTP 请求指标中间件
///
/// 路径标签使用路由模板（如 `/work-orders/{id}`），避免标签基数膨胀
pub async fn track_http_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    let duration = start.elapsed().as_secs_f64() * 1000.0;
    record_http_request(&method, &path, response.status().as_u16(), duration);

    response
}
