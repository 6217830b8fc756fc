use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use models::record::Model as Record;

use crate::{errors::ApiError, state::AppState};

#[utoipa::path(
    post, path = "/create", tag = "record",
    request_body = crate::openapi::RecordRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RecordDoc),
        (status = 400, description = "Invalid request data / Missing required fields", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_record(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let rec = state.records.create(&body).await?;
    Ok((StatusCode::CREATED, Json(rec)))
}
