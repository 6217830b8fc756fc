use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::{number::Number, sum::SumRecord};
use tracing::warn;

use crate::{errors::ApiError, state::AppState};

#[utoipa::path(
    post, path = "/sum", tag = "sum",
    request_body = crate::openapi::SumRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::SumRecordDoc),
        (status = 400, description = "Invalid request data / Missing required fields", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_sum(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SumRecord>), ApiError> {
    let rec = state.sums.create(&body).await?;
    Ok((StatusCode::CREATED, Json(rec)))
}

#[utoipa::path(
    get, path = "/sum/result/{value}", tag = "sum",
    params(("value" = String, Path, description = "Result value to match, integer or decimal")),
    responses(
        (status = 200, description = "Matching sums, possibly none", body = [crate::openapi::SumRecordDoc]),
        (status = 400, description = "Invalid result value", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn sums_by_result(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<SumRecord>>, ApiError> {
    let value: Number = raw.parse().map_err(|_| {
        warn!(value = %raw, "non-numeric result lookup");
        ApiError::bad_request("Invalid result value")
    })?;
    let found = state.sums.find_by_result(value).await?;
    Ok(Json(found))
}
