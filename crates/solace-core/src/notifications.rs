use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display name used when an event carries no actor identity
/// (deleted account, anonymous comment).
pub const ANONYMOUS_ACTOR: &str = "Someone";

/// Comment previews keep this many characters before the ellipsis.
pub const COMMENT_PREVIEW_CHARS: usize = 50;

pub const FEED_LINK: &str = "/feed";
pub const MESSAGES_LINK: &str = "/messages";

/// Someone reacted to a post owned by the caller.
#[derive(Debug, Clone)]
pub struct ReactionEvent {
    pub id: Uuid,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
    pub target_post_id: Uuid,
    pub actor_id: Option<Uuid>,
    pub actor_username: Option<String>,
}

/// Someone commented on a post owned by the caller.
#[derive(Debug, Clone)]
pub struct CommentEvent {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub post_id: Uuid,
    pub actor_id: Option<Uuid>,
    pub actor_username: Option<String>,
}

/// An unread direct message addressed to the caller.
#[derive(Debug, Clone)]
pub struct MessageEvent {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub sender_id: Option<Uuid>,
    pub sender_username: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Reaction,
    Comment,
    Message,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reaction => "reaction",
            Self::Comment => "comment",
            Self::Message => "message",
        }
    }

    pub fn link(self) -> &'static str {
        match self {
            Self::Reaction | Self::Comment => FEED_LINK,
            Self::Message => MESSAGES_LINK,
        }
    }
}

/// A notification synthesized for one response. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    /// `"<kind>-<source id>"`, stable across runs over the same events.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    pub link: String,
}

impl NotificationItem {
    fn new(kind: NotificationKind, source_id: Uuid, message: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: format!("{}-{}", kind.as_str(), source_id),
            kind,
            message,
            created_at,
            read: false,
            link: kind.link().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationLimits {
    pub reactions: usize,
    pub comments: usize,
    pub messages: usize,
    pub total: usize,
}

impl Default for NotificationLimits {
    fn default() -> Self {
        Self {
            reactions: 20,
            comments: 20,
            messages: 10,
            total: 30,
        }
    }
}

impl NotificationLimits {
    /// Override the total cap, clamped to `1..=` the sum of the per-kind
    /// limits (the most the merge can ever produce).
    pub fn with_total(self, total: usize) -> Self {
        let ceiling = (self.reactions + self.comments + self.messages).max(1);
        Self {
            total: total.clamp(1, ceiling),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notifications {
    pub notifications: Vec<NotificationItem>,
    /// Number of items returned. Read state is only persisted for
    /// messages, so every synthesized item counts as unread.
    pub unread_count: usize,
}

/// Merge reactions, comments and unread messages into one feed, newest first.
///
/// Inputs are expected to be scoped to content owned by the caller already.
/// Events whose actor is `exclude_actor_id` are dropped regardless. Each kind
/// contributes at most its own limit (its most recent events), and the merged
/// list is cut to `limits.total`. Items with equal timestamps keep input
/// order: reactions, then comments, then messages.
pub fn aggregate_notifications(
    reactions: &[ReactionEvent],
    comments: &[CommentEvent],
    messages: &[MessageEvent],
    exclude_actor_id: Uuid,
    limits: NotificationLimits,
) -> Notifications {
    let not_self = |actor: Option<Uuid>| actor != Some(exclude_actor_id);

    let reaction_items = most_recent(
        reactions
            .iter()
            .filter(|r| not_self(r.actor_id))
            .map(|r| {
                NotificationItem::new(
                    NotificationKind::Reaction,
                    r.id,
                    format!("{} reacted {} to your post", actor_name(&r.actor_username), r.emoji),
                    r.created_at,
                )
            }),
        limits.reactions,
    );

    let comment_items = most_recent(
        comments
            .iter()
            .filter(|c| not_self(c.actor_id))
            .map(|c| {
                NotificationItem::new(
                    NotificationKind::Comment,
                    c.id,
                    format!(
                        "{} commented: \"{}\"",
                        actor_name(&c.actor_username),
                        comment_preview(&c.content)
                    ),
                    c.created_at,
                )
            }),
        limits.comments,
    );

    let message_items = most_recent(
        messages
            .iter()
            .filter(|m| not_self(m.sender_id))
            .map(|m| {
                NotificationItem::new(
                    NotificationKind::Message,
                    m.id,
                    format!("New message from {}", actor_name(&m.sender_username)),
                    m.created_at,
                )
            }),
        limits.messages,
    );

    let mut notifications = reaction_items;
    notifications.extend(comment_items);
    notifications.extend(message_items);

    let notifications = most_recent(notifications.into_iter(), limits.total);
    let unread_count = notifications.len();

    Notifications {
        notifications,
        unread_count,
    }
}

/// First [`COMMENT_PREVIEW_CHARS`] characters of `content`, with `...`
/// appended only when something was cut.
pub fn comment_preview(content: &str) -> String {
    match content.char_indices().nth(COMMENT_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

fn actor_name(username: &Option<String>) -> &str {
    match username.as_deref() {
        Some(name) if !name.trim().is_empty() => name,
        _ => ANONYMOUS_ACTOR,
    }
}

/// Stable sort newest first, then keep `limit` items.
fn most_recent(items: impl Iterator<Item = NotificationItem>, limit: usize) -> Vec<NotificationItem> {
    let mut items: Vec<NotificationItem> = items.collect();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items.truncate(limit);
    items
}
