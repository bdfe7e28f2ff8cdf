use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use solace_db::models::{format_timestamp, parse_timestamp};
use solace_types::api::{Claims, CreatePostRequest, PostResponse};

use crate::error::{ApiError, ApiResult};
use crate::rows::{group_reactions, post_response};
use crate::state::{AppState, blocking};

pub const MAX_POST_CHARS: usize = 5000;
const MAX_FEED_LIMIT: u32 = 200;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedQuery {
    pub limit: Option<u32>,
    /// Cursor: `created_at` and `id` of the last post on the previous page,
    /// as returned by this endpoint. Both or neither.
    pub before: Option<String>,
    pub before_id: Option<Uuid>,
}

/// Normalise a client cursor to the `(created_at, id)` pair the store
/// compares against. `before` may be RFC 3339 or storage format.
fn feed_cursor(before: Option<&str>, before_id: Option<Uuid>) -> ApiResult<Option<(String, String)>> {
    match (before, before_id) {
        (None, None) => Ok(None),
        (Some(raw), Some(id)) => {
            let at = parse_timestamp(raw)
                .ok_or_else(|| ApiError::BadRequest(format!("invalid cursor timestamp: {}", raw)))?;
            Ok(Some((format_timestamp(at), id.to_string())))
        }
        _ => Err(ApiError::BadRequest("before and before_id must be given together".into())),
    }
}

/// Trimmed content, rejected when empty or longer than `max` characters.
pub(crate) fn validate_content(content: &str, max: usize) -> ApiResult<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BadRequest("content must not be empty".into()));
    }
    if trimmed.chars().count() > max {
        return Err(ApiError::BadRequest(format!("content exceeds {} characters", max)));
    }
    Ok(trimmed.to_string())
}

pub async fn get_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
    Extension(_claims): Extension<Claims>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let limit = query.limit.unwrap_or(state.feed_page_size).clamp(1, MAX_FEED_LIMIT);
    let cursor = feed_cursor(query.before.as_deref(), query.before_id)?;

    let (rows, reaction_rows) = blocking(&state, move |db| {
        let before = cursor.as_ref().map(|(at, id)| (at.as_str(), id.as_str()));
        let rows = db.get_feed(limit, before)?;
        let post_ids: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();
        let reaction_rows = db.get_reactions_for_posts(&post_ids)?;
        Ok((rows, reaction_rows))
    })
    .await?;

    let mut reactions = group_reactions(&reaction_rows);
    let posts = rows
        .into_iter()
        .map(|row| {
            let groups = reactions.remove(&row.id).unwrap_or_default();
            post_response(row, groups)
        })
        .collect();

    Ok(Json(posts))
}

pub async fn create_post(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreatePostRequest>,
) -> ApiResult<impl IntoResponse> {
    let content = validate_content(&req.content, MAX_POST_CHARS)?;
    let post_id = Uuid::new_v4();
    let is_anonymous = req.is_anonymous;

    let author_id = claims.sub.to_string();
    let row = blocking(&state, move |db| {
        let pid = post_id.to_string();
        db.create_post(&pid, &author_id, &content, is_anonymous)?;
        db.get_post(&pid)
    })
    .await?
    .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("post {} vanished after insert", post_id)))?;

    info!("User {} created post {}", claims.username, post_id);

    Ok((StatusCode::CREATED, Json(post_response(row, vec![]))))
}

/// Authors may delete their own posts; moderators use the admin route.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<StatusCode> {
    let pid = post_id.to_string();
    let post = blocking(&state, move |db| db.get_post(&pid))
        .await?
        .ok_or_else(|| ApiError::NotFound("post not found".into()))?;

    if post.author_id != claims.sub.to_string() {
        return Err(ApiError::Forbidden("only the author can delete this post".into()));
    }

    let pid = post_id.to_string();
    blocking(&state, move |db| db.delete_post(&pid)).await?;

    info!("User {} deleted post {}", claims.username, post_id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_trimmed_and_bounded() {
        assert_eq!(validate_content("  hi  ", 10).unwrap(), "hi");
        assert!(validate_content("   ", 10).is_err());
        assert!(validate_content(&"x".repeat(11), 10).is_err());
        assert!(validate_content(&"é".repeat(10), 10).is_ok());
    }

    #[test]
    fn feed_cursor_accepts_api_and_storage_timestamps() {
        let id = Uuid::new_v4();
        let expected = Some(("2024-01-02 03:04:05".to_string(), id.to_string()));
        assert_eq!(feed_cursor(Some("2024-01-02T03:04:05Z"), Some(id)).unwrap(), expected);
        assert_eq!(feed_cursor(Some("2024-01-02 03:04:05"), Some(id)).unwrap(), expected);
        assert_eq!(feed_cursor(None, None).unwrap(), None);
        assert!(feed_cursor(Some("2024-01-02T03:04:05Z"), None).is_err());
        assert!(feed_cursor(None, Some(id)).is_err());
        assert!(feed_cursor(Some("yesterday"), Some(id)).is_err());
    }
}
