use crate::controller::Controller;
use crate::handlers;
use axum::{routing::{get, post}, Router};

pub fn router(controller: Controller) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/tab/:tab", post(handlers::switch_tab))
        .route("/offers", post(handlers::add_offer))
        .route("/reset", post(handlers::reset))
        .route("/api/view", get(handlers::get_view))
        .with_state(controller)
}
