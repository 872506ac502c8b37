use axum::{routing::get, Router};

use crate::handlers::influ_product::get_influ_products;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/influ-products", get(get_influ_products))
}
