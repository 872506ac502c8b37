// src/handlers/influ_product.rs
use axum::{extract::State, Json};
use tracing::{error, instrument};

use crate::dtos::ApiResponse;
use crate::error::AppError;
use crate::models::InfluProduct;
use crate::state::AppState;

// GET /influ-products - List all listings with their influencer
#[instrument(skip(store))]
pub async fn get_influ_products(
    State(AppState { store }): State<AppState>,
) -> Result<Json<ApiResponse<Vec<InfluProduct>>>, AppError> {
    let influ_products = store.list_influ_products().await.map_err(|e| {
        error!(?e, "Failed to fetch influencer products");
        AppError::query("Failed to fetch influencer products", e)
    })?;

    Ok(Json(ApiResponse::ok(influ_products)))
}
