use axum::{
    Extension, Json,
    extract::{Path, State},
};
use tracing::debug;
use uuid::Uuid;

use solace_types::api::{Claims, ToggleReactionRequest, ToggleReactionResponse};

use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, blocking};

/// Emoji sequences (ZWJ families, flags, skin tones) run to several chars.
const MAX_EMOJI_CHARS: usize = 16;

fn validate_emoji(emoji: &str) -> ApiResult<()> {
    let len = emoji.chars().count();
    if len == 0 || len > MAX_EMOJI_CHARS || emoji.chars().any(|c| c.is_whitespace() || c.is_ascii_alphanumeric()) {
        return Err(ApiError::BadRequest("invalid emoji".into()));
    }
    Ok(())
}

pub async fn toggle_reaction(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<ToggleReactionRequest>,
) -> ApiResult<Json<ToggleReactionResponse>> {
    validate_emoji(&req.emoji)?;

    let reaction_id = Uuid::new_v4().to_string();
    let pid = post_id.to_string();
    let uid = claims.sub.to_string();
    let emoji = req.emoji.clone();

    let added = blocking(&state, move |db| {
        if db.get_post(&pid)?.is_none() {
            return Ok(None);
        }
        db.toggle_reaction(&reaction_id, &pid, &uid, &emoji).map(Some)
    })
    .await?
    .ok_or_else(|| ApiError::NotFound("post not found".into()))?;

    debug!(
        "User {} {} {} on post {}",
        claims.username,
        if added { "added" } else { "removed" },
        req.emoji,
        post_id
    );

    Ok(Json(ToggleReactionResponse { added }))
}
