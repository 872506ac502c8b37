use axum::{routing::get, Router};

use crate::handlers::product::{get_product, get_products_by_influ_product};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products/{influ_product_id}", get(get_products_by_influ_product))
        .route("/product/{id}", get(get_product))
}
