//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;

use axum::{Router, middleware};
use config::AppConfig;
use errors::AppResult;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::health::{HealthChecker, health_routes};
use crate::http_metrics::{MetricsRecorder, track_http_metrics};
use crate::infrastructure::Infrastructure;
use crate::runtime::{init_runtime, shutdown_signal};

/// 组装完整应用：业务路由 + 运维端点 + 中间件
pub fn build_app(
    service_router: Router,
    checker: HealthChecker,
    metrics: Option<MetricsRecorder>,
) -> Router {
    service_router
        .merge(health_routes(checker, metrics))
        .layer(middleware::from_fn(track_http_metrics))
        .layer(TraceLayer::new_for_http())
}

/// 运行 HTTP 服务
///
/// 1. 加载配置
/// 2. 初始化运行时（日志）
/// 3. 安装 Prometheus recorder
/// 4. 创建基础设施资源（数据库连接池）
/// 5. 调用用户提供的闭包构建业务路由
/// 6. 启动服务器并处理 graceful shutdown
/// 7. 关闭连接池
///
/// # 示例
///
/// ```ignore
/// bootstrap::run_http_server("config", |infra| async move {
///     Ok(my_routes(infra.postgres_pool()))
/// })
/// .await
/// ```
pub async fn run_http_server<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics = MetricsRecorder::install();

    // 4. 创建基础设施
    let infra = Infrastructure::from_config(&config).await?;

    // 5. 构建业务路由
    let service_router = router_builder(infra.clone()).await?;
    let app = build_app(
        service_router,
        HealthChecker::new(infra.postgres_pool()),
        metrics,
    );

    // 6. 启动服务器
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "HTTP server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 7. 清理
    let pool_status = infra.postgres_pool_status();
    info!(
        size = pool_status.size,
        idle = pool_status.idle,
        "Closing infrastructure"
    );
    infra.shutdown().await;

    info!("Service stopped");

    Ok(())
}
