pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::access::{handle_access, require_access};
use crate::curriculum::handlers as curriculum;
use crate::export::handlers as export;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let gated = Router::new()
        // Form model
        .route("/api/v1/catalog", get(curriculum::handle_catalog))
        .route(
            "/api/v1/form/meetings",
            post(curriculum::handle_set_meeting_count),
        )
        .route("/api/v1/form/pedagogy", post(curriculum::handle_set_pedagogy))
        .route(
            "/api/v1/form/dimensions",
            post(curriculum::handle_toggle_dimension),
        )
        .route(
            "/api/v1/form/suggestion",
            post(curriculum::handle_apply_suggestion),
        )
        // Generation
        .route("/api/v1/suggestions", post(generation::handle_suggestions))
        .route("/api/v1/rpm/generate", post(generation::handle_generate))
        // Document + exports
        .route("/api/v1/rpm/render", post(export::handle_render))
        .route("/api/v1/rpm/export/clipboard", post(export::handle_clipboard))
        .route("/api/v1/rpm/export/pdf", post(export::handle_pdf))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_access));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/access", post(handle_access))
        // Relay: credential travels in the body, the access secret does not apply.
        .route("/api/v1/generate-rpm", post(generation::handle_relay))
        .merge(gated)
        .with_state(state)
}
