//! Reader API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{AppResult, ErrorResponse},
    models::reader::{CreateReader, Reader, UpdateReader},
};

use super::{record_id, AppJson, AppPath};

/// List all readers
#[utoipa::path(
    get,
    path = "/readers",
    tag = "readers",
    responses(
        (status = 200, description = "All readers", body = Vec<Reader>)
    )
)]
pub async fn list_readers(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Reader>>> {
    let readers = state.services.readers.list().await?;
    Ok(Json(readers))
}

/// Get reader by ID
#[utoipa::path(
    get,
    path = "/readers/{id}",
    tag = "readers",
    params(("id" = i64, Path, description = "Reader ID")),
    responses(
        (status = 200, description = "Reader details", body = Reader),
        (status = 404, description = "Reader not found", body = ErrorResponse)
    )
)]
pub async fn get_reader(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Reader>> {
    let id = record_id(id)?;
    let reader = state.services.readers.get_by_id(id).await?;
    Ok(Json(reader))
}

/// Register a reader
#[utoipa::path(
    post,
    path = "/readers",
    tag = "readers",
    request_body = CreateReader,
    responses(
        (status = 201, description = "Reader created", body = Reader),
        (status = 422, description = "Validation messages", body = Vec<String>)
    )
)]
pub async fn create_reader(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<CreateReader>,
) -> AppResult<(StatusCode, Json<Reader>)> {
    let reader = state.services.readers.create(data).await?;
    Ok((StatusCode::CREATED, Json(reader)))
}

/// Update some fields of a reader
#[utoipa::path(
    patch,
    path = "/readers/{id}",
    tag = "readers",
    params(("id" = i64, Path, description = "Reader ID")),
    request_body = UpdateReader,
    responses(
        (status = 200, description = "Reader updated", body = Reader),
        (status = 404, description = "Reader not found", body = ErrorResponse),
        (status = 422, description = "Validation messages", body = Vec<String>)
    )
)]
pub async fn update_reader(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(data): AppJson<UpdateReader>,
) -> AppResult<Json<Reader>> {
    let id = record_id(id)?;
    let reader = state.services.readers.update(id, &data).await?;
    Ok(Json(reader))
}

/// Delete a reader
#[utoipa::path(
    delete,
    path = "/readers/{id}",
    tag = "readers",
    params(("id" = i64, Path, description = "Reader ID")),
    responses(
        (status = 204, description = "Reader deleted"),
        (status = 404, description = "Reader not found", body = ErrorResponse)
    )
)]
pub async fn delete_reader(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<StatusCode> {
    let id = record_id(id)?;
    state.services.readers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
