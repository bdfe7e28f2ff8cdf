use axum::{
    Extension, Json,
    extract::{Query, State},
};
use chrono::Local;
use serde::Deserialize;
use tracing::debug;

use solace_core::{NotificationLimits, Notifications, aggregate_notifications, compute_streak};
use solace_types::api::{Claims, MarkReadResponse, StreakResponse};

use crate::error::ApiResult;
use crate::rows::{activity_records, comment_event, message_event, reaction_event};
use crate::state::{AppState, blocking};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationQuery {
    /// Overrides the total cap, up to the sum of the per-kind defaults.
    pub limit: Option<usize>,
}

/// GET /notifications: reactions and comments on the caller's posts plus
/// unread messages, merged newest first.
pub async fn get_notifications(
    State(state): State<AppState>,
    Query(query): Query<NotificationQuery>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<Notifications>> {
    let limits = match query.limit {
        Some(total) => NotificationLimits::default().with_total(total),
        None => NotificationLimits::default(),
    };

    let uid = claims.sub.to_string();
    let (reactions, comments, messages) = blocking(&state, move |db| {
        Ok((
            db.get_reaction_notices(&uid, limits.reactions)?,
            db.get_comment_notices(&uid, limits.comments)?,
            db.get_unread_message_notices(&uid, limits.messages)?,
        ))
    })
    .await?;

    let reactions: Vec<_> = reactions.into_iter().map(reaction_event).collect();
    let comments: Vec<_> = comments.into_iter().map(comment_event).collect();
    let messages: Vec<_> = messages.into_iter().map(message_event).collect();

    let feed = aggregate_notifications(&reactions, &comments, &messages, claims.sub, limits);
    debug!("{} notifications for {}", feed.unread_count, claims.username);

    Ok(Json(feed))
}

/// POST /notifications/read: only messages carry read state, so this marks
/// every received message read.
pub async fn mark_all_read(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<MarkReadResponse>> {
    let uid = claims.sub.to_string();
    let updated = blocking(&state, move |db| db.mark_all_messages_read(&uid)).await?;
    Ok(Json(MarkReadResponse { updated }))
}

/// GET /me/streak: consecutive days with a post or comment, in server-local
/// dates.
pub async fn get_streak(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<StreakResponse>> {
    let uid = claims.sub.to_string();
    let raw = blocking(&state, move |db| db.get_activity_timestamps(&uid)).await?;

    let streak = compute_streak(&activity_records(&raw), Local::now().date_naive());
    Ok(Json(StreakResponse { streak }))
}
