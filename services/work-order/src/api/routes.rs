//! 工单路由

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::{get, post},
};
use errors::{AppError, AppResult};

use crate::application::ServiceHandler;
use crate::application::commands::UpdateWorkOrderCommand;
use crate::application::queries::GetWorkOrderQuery;
use crate::domain::value_objects::WorkOrderId;

use super::dto::{
    CreateWorkOrderRequest, UpdateWorkOrderRequest, UpdateWorkOrderResponse, WorkOrderResponse,
};

pub fn routes(handler: Arc<ServiceHandler>) -> Router {
    Router::new()
        .route("/work-orders", post(create_work_order))
        .route(
            "/work-orders/{id}",
            get(get_work_order).put(update_work_order),
        )
        .with_state(handler)
}

async fn create_work_order(
    State(handler): State<Arc<ServiceHandler>>,
    payload: Result<Json<CreateWorkOrderRequest>, JsonRejection>,
) -> AppResult<Json<WorkOrderResponse>> {
    let Json(req) = payload.map_err(json_rejection)?;

    let work_order = handler.create_work_order(req.into()).await?;

    Ok(Json(work_order.into()))
}

async fn update_work_order(
    State(handler): State<Arc<ServiceHandler>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateWorkOrderRequest>, JsonRejection>,
) -> AppResult<Json<UpdateWorkOrderResponse>> {
    let Path(id) = id.map_err(path_rejection)?;
    let Json(req) = payload.map_err(json_rejection)?;

    let updated = handler
        .update_work_order(UpdateWorkOrderCommand {
            id: WorkOrderId(id),
            changes: req.into(),
        })
        .await?;

    Ok(Json(updated.into()))
}

async fn get_work_order(
    State(handler): State<Arc<ServiceHandler>>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<WorkOrderResponse>> {
    let Path(id) = id.map_err(path_rejection)?;

    let work_order = handler
        .get_work_order(GetWorkOrderQuery {
            id: WorkOrderId(id),
        })
        .await?;

    Ok(Json(work_order.into()))
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::validation(rejection.body_text())
}

fn path_rejection(rejection: PathRejection) -> AppError {
    AppError::validation(rejection.body_text())
}
