//! work-order Service 入口

use std::sync::Arc;

use bootstrap::{Infrastructure, run_http_server};
use tracing::info;

use work_order::api;
use work_order::application::ServiceHandler;
use work_order::infrastructure::persistence::PostgresWorkOrderRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    run_http_server(&config_dir, |infra: Infrastructure| async move {
        info!("Initializing work-order service...");

        let work_order_repo = Arc::new(PostgresWorkOrderRepository::new(infra.postgres_pool()));
        let handler = Arc::new(ServiceHandler::new(work_order_repo));
        info!("Service handler initialized");

        Ok(api::routes(handler))
    })
    .await
}
