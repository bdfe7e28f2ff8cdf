use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use uuid::Uuid;

use solace_types::api::{Claims, UserSummary};

use crate::error::{ApiError, ApiResult};
use crate::rows::user_summary;
use crate::state::{AppState, blocking};

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserSummary>>> {
    let rows = blocking(&state, |db| db.list_users()).await?;
    Ok(Json(rows.into_iter().map(user_summary).collect()))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<StatusCode> {
    let pid = post_id.to_string();
    if !blocking(&state, move |db| db.delete_post(&pid)).await? {
        return Err(ApiError::NotFound("post not found".into()));
    }
    info!("Admin {} removed post {}", claims.username, post_id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<StatusCode> {
    let cid = comment_id.to_string();
    if !blocking(&state, move |db| db.delete_comment(&cid)).await? {
        return Err(ApiError::NotFound("comment not found".into()));
    }
    info!("Admin {} removed comment {}", claims.username, comment_id);
    Ok(StatusCode::NO_CONTENT)
}
