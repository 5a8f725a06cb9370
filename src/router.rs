use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/bookings",
            get(handlers::bookings::list_bookings)
                .post(handlers::bookings::create_booking)
                .fallback(handlers::bookings::method_not_allowed),
        )
        .route(
            "/bookings/:id",
            get(handlers::bookings::get_booking)
                .put(handlers::bookings::replace_booking)
                .patch(handlers::bookings::patch_booking)
                .delete(handlers::bookings::delete_booking)
                .fallback(handlers::bookings::method_not_allowed),
        )
        .route(
            "/bookings/:id/cancel",
            post(handlers::bookings::cancel_booking)
                .fallback(handlers::bookings::method_not_allowed),
        )
        .fallback(handlers::bookings::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
