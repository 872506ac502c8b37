use axum::{routing::get, Router};

use crate::handlers::influencer::get_profiles;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/profiles", get(get_profiles))
}
