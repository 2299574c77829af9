use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::demo;

/// Routes that sit behind the authentication gate.
pub fn init_demo_router() -> Router<AppState> {
    Router::new().route("/demo", get(demo))
}
