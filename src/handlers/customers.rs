//! Customer endpoints.

use super::Page;
use crate::error::AppError;
use crate::model::{CustomerCreate, CustomerUpdate};
use crate::service::CustomerService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CustomerCreate>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.connect().await?;
    let customer = CustomerService::create(&mut conn, &req).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.connect().await?;
    let customers = CustomerService::list(&mut conn, page.limit(), page.skip()).await?;
    Ok(Json(customers))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.connect().await?;
    let customer = CustomerService::get(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {id} not found")))?;
    Ok(Json(customer))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<CustomerUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.connect().await?;
    let customer = CustomerService::update(&mut conn, id, &req).await?;
    Ok(Json(customer))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.connect().await?;
    CustomerService::delete(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
