use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use solace_types::api::{Claims, MessageResponse, SendMessageRequest};

use crate::error::{ApiError, ApiResult};
use crate::posts::validate_content;
use crate::rows::message_response;
use crate::state::{AppState, blocking};

pub const MAX_MESSAGE_CHARS: usize = 4000;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    50
}

/// GET /messages: everything addressed to the caller, newest first.
pub async fn get_inbox(
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let uid = claims.sub.to_string();
    let limit = query.limit.clamp(1, 200);
    let rows = blocking(&state, move |db| db.get_inbox(&uid, limit)).await?;
    Ok(Json(rows.into_iter().map(message_response).collect()))
}

/// GET /messages/{id}: conversation between the caller and user `id`.
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(other_id): Path<Uuid>,
    Query(query): Query<MessageQuery>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let uid = claims.sub.to_string();
    let oid = other_id.to_string();
    let limit = query.limit.clamp(1, 200);
    let rows = blocking(&state, move |db| db.get_conversation(&uid, &oid, limit)).await?;
    Ok(Json(rows.into_iter().map(message_response).collect()))
}

/// POST /messages/{id}: send a direct message to user `id`.
pub async fn send_message(
    State(state): State<AppState>,
    Path(recipient_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SendMessageRequest>,
) -> ApiResult<impl IntoResponse> {
    if recipient_id == claims.sub {
        return Err(ApiError::BadRequest("cannot message yourself".into()));
    }
    let content = validate_content(&req.content, MAX_MESSAGE_CHARS)?;
    let message_id = Uuid::new_v4();

    let sender = claims.sub.to_string();
    let recipient = recipient_id.to_string();
    let row = blocking(&state, move |db| {
        if db.get_user_by_id(&recipient)?.is_none() {
            return Ok(None);
        }
        let mid = message_id.to_string();
        db.insert_message(&mid, &sender, &recipient, &content)?;
        db.get_message(&mid)
    })
    .await?
    .ok_or_else(|| ApiError::NotFound("recipient not found".into()))?;

    info!("User {} sent message {} to {}", claims.username, message_id, recipient_id);

    Ok((StatusCode::CREATED, Json(message_response(row))))
}

/// POST /messages/{id}/read: mark a received message as read.
pub async fn mark_read(
    State(state): State<AppState>,
    Path(message_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<StatusCode> {
    let mid = message_id.to_string();
    let uid = claims.sub.to_string();
    let found = blocking(&state, move |db| {
        let Some(message) = db.get_message(&mid)? else {
            return Ok(false);
        };
        if message.recipient_id != uid {
            return Ok(false);
        }
        db.mark_message_read(&mid, &uid)?;
        Ok(true)
    })
    .await?;

    if !found {
        return Err(ApiError::NotFound("message not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
