//! Database row types: these map directly to SQLite rows.
//! Distinct from solace-types API models to keep the DB layer independent.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Text format of SQLite's `datetime('now')`.
const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct UserRow {
    pub id: String,
    pub username: String,
    pub password: String,
    pub is_admin: bool,
    pub created_at: String,
}

pub struct PostRow {
    pub id: String,
    pub author_id: String,
    pub author_username: Option<String>,
    pub content: String,
    pub is_anonymous: bool,
    pub created_at: String,
    pub comment_count: u32,
}

pub struct CommentRow {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub author_username: Option<String>,
    pub content: String,
    pub is_anonymous: bool,
    pub created_at: String,
}

pub struct ReactionRow {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub emoji: String,
    pub created_at: String,
}

pub struct MessageRow {
    pub id: String,
    pub sender_id: String,
    pub sender_username: Option<String>,
    pub recipient_id: String,
    pub content: String,
    pub read_at: Option<String>,
    pub created_at: String,
}

// -- Notification sources --
// Rows already scoped to "owned by the caller, actor is someone else".

pub struct ReactionNoticeRow {
    pub id: String,
    pub post_id: String,
    pub emoji: String,
    pub actor_id: String,
    pub actor_username: Option<String>,
    pub created_at: String,
}

pub struct CommentNoticeRow {
    pub id: String,
    pub post_id: String,
    pub content: String,
    pub actor_id: String,
    /// `None` when the comment was posted anonymously.
    pub actor_username: Option<String>,
    pub created_at: String,
}

pub struct UnreadMessageRow {
    pub id: String,
    pub sender_id: String,
    pub sender_username: Option<String>,
    pub created_at: String,
}

/// Render a timestamp in storage format, for comparisons against stored text.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(STORAGE_FORMAT).to_string()
}

/// Parse a stored timestamp. SQLite's `datetime('now')` yields
/// "YYYY-MM-DD HH:MM:SS" in UTC without an offset; RFC 3339 is accepted too.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>()
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, STORAGE_FORMAT)
                .ok()
                .map(|ndt| ndt.and_utc())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_sqlite_and_rfc3339() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(parse_timestamp("2024-01-02 03:04:05"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-02T03:04:05Z"), Some(expected));
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(format_timestamp(expected), "2024-01-02 03:04:05");
    }
}
