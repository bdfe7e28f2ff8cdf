//! Conversions from storage rows to API responses and core events.
//!
//! Rows with corrupt ids or timestamps are logged and mapped to defaults
//! instead of failing the whole response.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use solace_core::{ActivityRecord, CommentEvent, MessageEvent, ReactionEvent};
use solace_db::models::{
    CommentNoticeRow, CommentRow, MessageRow, PostRow, ReactionNoticeRow, ReactionRow,
    UnreadMessageRow, UserRow, parse_timestamp,
};
use solace_types::api::{CommentResponse, MessageResponse, PostResponse, ReactionGroup, UserSummary};

pub(crate) fn parse_id(raw: &str, context: &str) -> Uuid {
    raw.parse().unwrap_or_else(|e| {
        warn!("Corrupt id '{}' on {}: {}", raw, context, e);
        Uuid::default()
    })
}

pub(crate) fn parse_time(raw: &str, context: &str) -> DateTime<Utc> {
    parse_timestamp(raw).unwrap_or_else(|| {
        warn!("Corrupt created_at '{}' on {}", raw, context);
        DateTime::default()
    })
}

/// Group reactions by post -> emoji -> user ids, keeping first-seen emoji order.
pub(crate) fn group_reactions(rows: &[ReactionRow]) -> HashMap<String, Vec<ReactionGroup>> {
    let mut grouped: HashMap<String, Vec<ReactionGroup>> = HashMap::new();
    for r in rows {
        let groups = grouped.entry(r.post_id.clone()).or_default();
        let user_id = parse_id(&r.user_id, "reaction");
        match groups.iter_mut().find(|g| g.emoji == r.emoji) {
            Some(group) => {
                group.count += 1;
                group.user_ids.push(user_id);
            }
            None => groups.push(ReactionGroup {
                emoji: r.emoji.clone(),
                count: 1,
                user_ids: vec![user_id],
            }),
        }
    }
    grouped
}

pub(crate) fn post_response(row: PostRow, reactions: Vec<ReactionGroup>) -> PostResponse {
    let context = format!("post '{}'", row.id);
    let (author_id, author_username) = if row.is_anonymous {
        (None, None)
    } else {
        (Some(parse_id(&row.author_id, &context)), row.author_username)
    };

    PostResponse {
        id: parse_id(&row.id, &context),
        author_id,
        author_username,
        content: row.content,
        is_anonymous: row.is_anonymous,
        created_at: parse_time(&row.created_at, &context),
        comment_count: row.comment_count,
        reactions,
    }
}

pub(crate) fn comment_response(row: CommentRow) -> CommentResponse {
    let context = format!("comment '{}'", row.id);
    let (author_id, author_username) = if row.is_anonymous {
        (None, None)
    } else {
        (Some(parse_id(&row.author_id, &context)), row.author_username)
    };

    CommentResponse {
        id: parse_id(&row.id, &context),
        post_id: parse_id(&row.post_id, &context),
        author_id,
        author_username,
        content: row.content,
        is_anonymous: row.is_anonymous,
        created_at: parse_time(&row.created_at, &context),
    }
}

pub(crate) fn message_response(row: MessageRow) -> MessageResponse {
    let context = format!("message '{}'", row.id);
    MessageResponse {
        id: parse_id(&row.id, &context),
        sender_id: parse_id(&row.sender_id, &context),
        sender_username: row.sender_username.unwrap_or_else(|| "unknown".to_string()),
        recipient_id: parse_id(&row.recipient_id, &context),
        content: row.content,
        read: row.read_at.is_some(),
        created_at: parse_time(&row.created_at, &context),
    }
}

pub(crate) fn user_summary(row: UserRow) -> UserSummary {
    let context = format!("user '{}'", row.id);
    UserSummary {
        id: parse_id(&row.id, &context),
        username: row.username,
        is_admin: row.is_admin,
        created_at: parse_time(&row.created_at, &context),
    }
}

// -- Core events --

pub(crate) fn reaction_event(row: ReactionNoticeRow) -> ReactionEvent {
    let context = format!("reaction '{}'", row.id);
    ReactionEvent {
        id: parse_id(&row.id, &context),
        emoji: row.emoji,
        created_at: parse_time(&row.created_at, &context),
        target_post_id: parse_id(&row.post_id, &context),
        actor_id: row.actor_id.parse().ok(),
        actor_username: row.actor_username,
    }
}

pub(crate) fn comment_event(row: CommentNoticeRow) -> CommentEvent {
    let context = format!("comment '{}'", row.id);
    CommentEvent {
        id: parse_id(&row.id, &context),
        content: row.content,
        created_at: parse_time(&row.created_at, &context),
        post_id: parse_id(&row.post_id, &context),
        actor_id: row.actor_id.parse().ok(),
        actor_username: row.actor_username,
    }
}

pub(crate) fn message_event(row: UnreadMessageRow) -> MessageEvent {
    let context = format!("message '{}'", row.id);
    MessageEvent {
        id: parse_id(&row.id, &context),
        created_at: parse_time(&row.created_at, &context),
        sender_id: row.sender_id.parse().ok(),
        sender_username: row.sender_username,
    }
}

/// Activity timestamps that fail to parse are dropped rather than defaulted,
/// so a corrupt row cannot extend or break a streak.
pub(crate) fn activity_records(raw: &[String]) -> Vec<ActivityRecord> {
    raw.iter()
        .filter_map(|ts| match parse_timestamp(ts) {
            Some(at) => Some(ActivityRecord::from_utc(at)),
            None => {
                warn!("Skipping corrupt activity timestamp '{}'", ts);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reaction(post_id: &str, emoji: &str) -> ReactionRow {
        ReactionRow {
            id: Uuid::new_v4().to_string(),
            post_id: post_id.into(),
            user_id: Uuid::new_v4().to_string(),
            emoji: emoji.into(),
            created_at: "2024-01-01 00:00:00".into(),
        }
    }

    #[test]
    fn groups_by_post_then_emoji() {
        let rows = vec![
            reaction("p1", "❤️"),
            reaction("p1", "🤗"),
            reaction("p1", "❤️"),
            reaction("p2", "🤗"),
        ];

        let grouped = group_reactions(&rows);

        let p1 = &grouped["p1"];
        assert_eq!(p1.len(), 2);
        assert_eq!(p1[0].emoji, "❤️");
        assert_eq!(p1[0].count, 2);
        assert_eq!(p1[0].user_ids.len(), 2);
        assert_eq!(grouped["p2"][0].count, 1);
    }

    #[test]
    fn anonymous_posts_hide_author() {
        let row = PostRow {
            id: Uuid::new_v4().to_string(),
            author_id: Uuid::new_v4().to_string(),
            author_username: Some("ana".into()),
            content: "rough day".into(),
            is_anonymous: true,
            created_at: "2024-01-01 08:00:00".into(),
            comment_count: 0,
        };

        let post = post_response(row, vec![]);
        assert!(post.author_id.is_none());
        assert!(post.author_username.is_none());
    }

    #[test]
    fn corrupt_activity_is_skipped() {
        let raw = vec!["2024-01-02 10:00:00".to_string(), "garbage".to_string()];
        assert_eq!(activity_records(&raw).len(), 1);
    }
}
