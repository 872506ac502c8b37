// src/handlers/product.rs
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, error, instrument};

use crate::dtos::ApiResponse;
use crate::error::AppError;
use crate::models::Product;
use crate::state::AppState;

/// Identifiers are `SERIAL` columns; anything that does not parse as one
/// cannot match a row.
fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

// GET /products/:influ_product_id - List products of one listing
#[instrument(skip(store))]
pub async fn get_products_by_influ_product(
    State(AppState { store }): State<AppState>,
    Path(influ_product_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Product>>>, AppError> {
    let Some(influ_product_id) = parse_id(&influ_product_id) else {
        debug!(%influ_product_id, "Non-numeric listing id matches no products");
        return Ok(Json(ApiResponse::ok(Vec::new())));
    };

    match store.list_products_by_influ_product(influ_product_id).await {
        Ok(products) => Ok(Json(ApiResponse::ok(products))),
        Err(e) => {
            error!(?e, influ_product_id, "Failed to fetch products");
            Err(AppError::query("Failed to fetch products", e))
        }
    }
}

// GET /product/:id - Get single product with its listing and influencer
#[instrument(skip(store))]
pub async fn get_product(
    State(AppState { store }): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let Some(id) = parse_id(&id) else {
        debug!(%id, "Non-numeric product id");
        return Err(AppError::not_found("Product not found"));
    };

    let product = store
        .get_product(id)
        .await
        .map_err(|e| {
            error!(?e, id, "Failed to fetch product");
            AppError::query("Failed to fetch product", e)
        })?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(ApiResponse::ok(product)))
}
