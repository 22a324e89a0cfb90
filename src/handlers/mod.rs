pub mod rest;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

use crate::service::NoteService;

pub fn router(service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/note", get(rest::get_all_notes).post(rest::create_note))
        .route("/note/{id}", delete(rest::delete_note))
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", rest::ApiDoc::openapi()),
        )
        .with_state(service)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Response {
    (StatusCode::OK, "route / ").into_response()
}
