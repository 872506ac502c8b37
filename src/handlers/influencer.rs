// src/handlers/influencer.rs
use axum::{extract::State, Json};
use tracing::{error, instrument};

use crate::dtos::ApiResponse;
use crate::error::AppError;
use crate::models::Influencer;
use crate::state::AppState;

// GET /profiles - List all influencers
#[instrument(skip(store))]
pub async fn get_profiles(
    State(AppState { store }): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Influencer>>>, AppError> {
    match store.list_influencers().await {
        Ok(influencers) => Ok(Json(ApiResponse::ok(influencers))),
        Err(e) => {
            error!(?e, "Failed to fetch influencer profiles");
            Err(AppError::query("Failed to fetch influencer profiles", e))
        }
    }
}
