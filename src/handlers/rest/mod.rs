use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{
    dto::{CreateNoteRequest, CreatedResponse, ErrorResponse, MessageResponse, NoteResponse},
    service::{NoteService, ServiceError},
};

#[derive(OpenApi)]
#[openapi(
    paths(create_note, get_all_notes, delete_note),
    components(schemas(
        NoteResponse,
        CreateNoteRequest,
        CreatedResponse,
        MessageResponse,
        ErrorResponse
    )),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

fn error(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

fn message(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(MessageResponse {
            message: message.to_string(),
        }),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/note",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = CreatedResponse),
        (status = 400, description = "Missing title or description, or unreadable body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!("rejected create note body: {}", rejection);
            return error(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    match service.create_note(payload).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(CreatedResponse {
                title: "notes created successfully".to_string(),
            }),
        )
            .into_response(),
        Err(ServiceError::Validation(reason)) => error(StatusCode::BAD_REQUEST, reason),
        Err(e) => {
            tracing::error!("failed to create note entry: {}", e);
            error(StatusCode::INTERNAL_SERVER_ERROR, "failed to create note")
        }
    }
}

#[utoipa::path(
    get,
    path = "/note",
    responses(
        (status = 200, description = "List of all notes", body = Vec<NoteResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(State(service): State<Arc<NoteService>>) -> Response {
    match service.list_notes().await {
        Ok(notes) => (StatusCode::OK, Json(notes)).into_response(),
        Err(e) => {
            tracing::error!("failed to get note entries: {}", e);
            error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[utoipa::path(
    delete,
    path = "/note/{id}",
    params(
        ("id" = String, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note deleted successfully", body = MessageResponse),
        (status = 404, description = "Note not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
) -> Response {
    match service.delete_note(&id).await {
        Ok(()) => message(StatusCode::OK, "item deleted succesfullly"),
        Err(ServiceError::NotFound) => message(StatusCode::NOT_FOUND, "note not found"),
        Err(e) => {
            tracing::error!("failed to delete note entry: {}", e);
            message(StatusCode::INTERNAL_SERVER_ERROR, "server error")
        }
    }
}
