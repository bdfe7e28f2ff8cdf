use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use solace_types::api::{Claims, CommentResponse, CreateCommentRequest};

use crate::error::{ApiError, ApiResult};
use crate::posts::validate_content;
use crate::rows::comment_response;
use crate::state::{AppState, blocking};

pub const MAX_COMMENT_CHARS: usize = 2000;

pub async fn get_comments(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    Extension(_claims): Extension<Claims>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let pid = post_id.to_string();
    let rows = blocking(&state, move |db| {
        if db.get_post(&pid)?.is_none() {
            return Ok(None);
        }
        db.get_comments(&pid).map(Some)
    })
    .await?
    .ok_or_else(|| ApiError::NotFound("post not found".into()))?;

    Ok(Json(rows.into_iter().map(comment_response).collect()))
}

pub async fn create_comment(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateCommentRequest>,
) -> ApiResult<impl IntoResponse> {
    let content = validate_content(&req.content, MAX_COMMENT_CHARS)?;
    let comment_id = Uuid::new_v4();
    let is_anonymous = req.is_anonymous;

    let pid = post_id.to_string();
    let author_id = claims.sub.to_string();
    let row = blocking(&state, move |db| {
        if db.get_post(&pid)?.is_none() {
            return Ok(None);
        }
        let cid = comment_id.to_string();
        db.create_comment(&cid, &pid, &author_id, &content, is_anonymous)?;
        db.get_comment(&cid)
    })
    .await?
    .ok_or_else(|| ApiError::NotFound("post not found".into()))?;

    Ok((StatusCode::CREATED, Json(comment_response(row))))
}
