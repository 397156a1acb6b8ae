//! Rental endpoints, including the return transition.

use super::Page;
use crate::error::AppError;
use crate::model::RentalCreate;
use crate::service::{CustomerService, RentalService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<RentalCreate>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.connect().await?;
    let rental = RentalService::create(&mut conn, &req).await?;
    Ok((StatusCode::CREATED, Json(rental)))
}

pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.connect().await?;
    let rentals = RentalService::list(&mut conn, page.limit(), page.skip()).await?;
    Ok(Json(rentals))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.connect().await?;
    let rental = RentalService::get(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("rental {id} not found")))?;
    Ok(Json(rental))
}

pub async fn mark_returned(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.connect().await?;
    let rental = RentalService::mark_returned(&mut conn, id).await?;
    Ok(Json(rental))
}

/// Rentals scoped to a customer; 404 before querying when the customer is unknown.
pub async fn list_for_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
    Query(page): Query<Page>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.connect().await?;
    if CustomerService::get(&mut conn, customer_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "customer {customer_id} not found"
        )));
    }
    let rentals =
        RentalService::list_for_customer(&mut conn, customer_id, page.limit(), page.skip())
            .await?;
    Ok(Json(rentals))
}
