use crate::Database;
use crate::models::{
    CommentNoticeRow, CommentRow, MessageRow, PostRow, ReactionNoticeRow, ReactionRow,
    UnreadMessageRow, UserRow,
};
use anyhow::Result;
use rusqlite::{Connection, ErrorCode, Row};

const POST_COLUMNS: &str = "p.id, p.author_id, u.username, p.content, p.is_anonymous, p.created_at,
     (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id)";

const COMMENT_COLUMNS: &str =
    "c.id, c.post_id, c.author_id, u.username, c.content, c.is_anonymous, c.created_at";

const MESSAGE_COLUMNS: &str =
    "m.id, m.sender_id, u.username, m.recipient_id, m.content, m.read_at, m.created_at";

impl Database {
    // -- Users --

    /// Returns false when the username is already taken (UNIQUE violation),
    /// so concurrent registrations for one name resolve to a single winner.
    pub fn create_user(&self, id: &str, username: &str, password_hash: &str, is_admin: bool) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let inserted = conn.execute(
                "INSERT INTO users (id, username, password, is_admin) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![id, username, password_hash, is_admin],
            );
            match inserted {
                Ok(_) => Ok(true),
                Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => Ok(false),
                Err(e) => Err(e.into()),
            }
        })
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "username", username))
    }

    pub fn get_user_by_id(&self, id: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "id", id))
    }

    pub fn list_users(&self) -> Result<Vec<UserRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, username, password, is_admin, created_at FROM users ORDER BY created_at, username",
            )?;
            let rows = stmt
                .query_map([], user_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Posts --

    pub fn create_post(&self, id: &str, author_id: &str, content: &str, is_anonymous: bool) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO posts (id, author_id, content, is_anonymous) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![id, author_id, content, is_anonymous],
            )?;
            Ok(())
        })
    }

    pub fn get_post(&self, id: &str) -> Result<Option<PostRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {POST_COLUMNS} FROM posts p LEFT JOIN users u ON p.author_id = u.id WHERE p.id = ?1"
            );
            conn.query_row(&sql, [id], post_from_row).optional()
        })
    }

    /// Newest posts first, ordered by `(created_at, id)`. `before` is the
    /// `(created_at, id)` of the last post on the previous page, with
    /// `created_at` in storage format. Posts sharing a second stay in order
    /// across page boundaries.
    pub fn get_feed(&self, limit: u32, before: Option<(&str, &str)>) -> Result<Vec<PostRow>> {
        let (before_at, before_id) = before.unzip();
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {POST_COLUMNS}
                 FROM posts p
                 LEFT JOIN users u ON p.author_id = u.id
                 WHERE (?2 IS NULL OR (p.created_at, p.id) < (?2, ?3))
                 ORDER BY p.created_at DESC, p.id DESC
                 LIMIT ?1"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(rusqlite::params![limit, before_at, before_id], post_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Returns false when no such post existed. Comments and reactions go
    /// with it (ON DELETE CASCADE).
    pub fn delete_post(&self, id: &str) -> Result<bool> {
        self.with_conn_mut(|conn| Ok(conn.execute("DELETE FROM posts WHERE id = ?1", [id])? > 0))
    }

    // -- Comments --

    pub fn create_comment(
        &self,
        id: &str,
        post_id: &str,
        author_id: &str,
        content: &str,
        is_anonymous: bool,
    ) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO comments (id, post_id, author_id, content, is_anonymous) VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![id, post_id, author_id, content, is_anonymous],
            )?;
            Ok(())
        })
    }

    pub fn get_comment(&self, id: &str) -> Result<Option<CommentRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {COMMENT_COLUMNS} FROM comments c LEFT JOIN users u ON c.author_id = u.id WHERE c.id = ?1"
            );
            conn.query_row(&sql, [id], comment_from_row).optional()
        })
    }

    /// Comments on a post, oldest first.
    pub fn get_comments(&self, post_id: &str) -> Result<Vec<CommentRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {COMMENT_COLUMNS}
                 FROM comments c
                 LEFT JOIN users u ON c.author_id = u.id
                 WHERE c.post_id = ?1
                 ORDER BY c.created_at ASC, c.rowid ASC"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([post_id], comment_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn delete_comment(&self, id: &str) -> Result<bool> {
        self.with_conn_mut(|conn| Ok(conn.execute("DELETE FROM comments WHERE id = ?1", [id])? > 0))
    }

    // -- Reactions --

    /// Toggle a reaction: removes if exists, inserts if not.
    /// Returns true when the reaction was added.
    pub fn toggle_reaction(&self, id: &str, post_id: &str, user_id: &str, emoji: &str) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let existing: Option<String> = tx
                .query_row(
                    "SELECT id FROM reactions WHERE post_id = ?1 AND user_id = ?2 AND emoji = ?3",
                    rusqlite::params![post_id, user_id, emoji],
                    |row| row.get(0),
                )
                .optional()?;

            let added = match existing {
                Some(existing_id) => {
                    tx.execute("DELETE FROM reactions WHERE id = ?1", [&existing_id])?;
                    false
                }
                None => {
                    tx.execute(
                        "INSERT INTO reactions (id, post_id, user_id, emoji) VALUES (?1, ?2, ?3, ?4)",
                        rusqlite::params![id, post_id, user_id, emoji],
                    )?;
                    true
                }
            };

            tx.commit()?;
            Ok(added)
        })
    }

    /// Batch-fetch reactions for a set of post IDs.
    pub fn get_reactions_for_posts(&self, post_ids: &[String]) -> Result<Vec<ReactionRow>> {
        if post_ids.is_empty() {
            return Ok(vec![]);
        }

        self.with_conn(|conn| {
            let placeholders: Vec<String> = (1..=post_ids.len()).map(|i| format!("?{}", i)).collect();
            let sql = format!(
                "SELECT id, post_id, user_id, emoji, created_at FROM reactions
                 WHERE post_id IN ({})
                 ORDER BY created_at ASC, rowid ASC",
                placeholders.join(", ")
            );

            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(rusqlite::params_from_iter(post_ids.iter()), |row| {
                    Ok(ReactionRow {
                        id: row.get(0)?,
                        post_id: row.get(1)?,
                        user_id: row.get(2)?,
                        emoji: row.get(3)?,
                        created_at: row.get(4)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    // -- Messages --

    pub fn insert_message(&self, id: &str, sender_id: &str, recipient_id: &str, content: &str) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO messages (id, sender_id, recipient_id, content) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![id, sender_id, recipient_id, content],
            )?;
            Ok(())
        })
    }

    pub fn get_message(&self, id: &str) -> Result<Option<MessageRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {MESSAGE_COLUMNS} FROM messages m LEFT JOIN users u ON m.sender_id = u.id WHERE m.id = ?1"
            );
            conn.query_row(&sql, [id], message_from_row).optional()
        })
    }

    /// Messages addressed to `recipient_id`, newest first.
    pub fn get_inbox(&self, recipient_id: &str, limit: u32) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {MESSAGE_COLUMNS}
                 FROM messages m
                 LEFT JOIN users u ON m.sender_id = u.id
                 WHERE m.recipient_id = ?1
                 ORDER BY m.created_at DESC, m.rowid DESC
                 LIMIT ?2"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(rusqlite::params![recipient_id, limit], message_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Both directions of a conversation between two users, newest first.
    pub fn get_conversation(&self, user_id: &str, other_id: &str, limit: u32) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {MESSAGE_COLUMNS}
                 FROM messages m
                 LEFT JOIN users u ON m.sender_id = u.id
                 WHERE (m.sender_id = ?1 AND m.recipient_id = ?2)
                    OR (m.sender_id = ?2 AND m.recipient_id = ?1)
                 ORDER BY m.created_at DESC, m.rowid DESC
                 LIMIT ?3"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(rusqlite::params![user_id, other_id, limit], message_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Marks one message read if it is addressed to `recipient_id` and still unread.
    pub fn mark_message_read(&self, id: &str, recipient_id: &str) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let updated = conn.execute(
                "UPDATE messages SET read_at = datetime('now')
                 WHERE id = ?1 AND recipient_id = ?2 AND read_at IS NULL",
                [id, recipient_id],
            )?;
            Ok(updated > 0)
        })
    }

    pub fn mark_all_messages_read(&self, recipient_id: &str) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let updated = conn.execute(
                "UPDATE messages SET read_at = datetime('now') WHERE recipient_id = ?1 AND read_at IS NULL",
                [recipient_id],
            )?;
            Ok(updated)
        })
    }

    // -- Notification sources --

    /// Reactions by other users on posts authored by `owner_id`, newest first.
    pub fn get_reaction_notices(&self, owner_id: &str, limit: usize) -> Result<Vec<ReactionNoticeRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT r.id, r.post_id, r.emoji, r.user_id, u.username, r.created_at
                 FROM reactions r
                 JOIN posts p ON r.post_id = p.id
                 LEFT JOIN users u ON r.user_id = u.id
                 WHERE p.author_id = ?1 AND r.user_id != ?1
                 ORDER BY r.created_at DESC, r.rowid DESC
                 LIMIT ?2",
            )?;
            let rows = stmt
                .query_map(rusqlite::params![owner_id, limit as i64], |row| {
                    Ok(ReactionNoticeRow {
                        id: row.get(0)?,
                        post_id: row.get(1)?,
                        emoji: row.get(2)?,
                        actor_id: row.get(3)?,
                        actor_username: row.get(4)?,
                        created_at: row.get(5)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Comments by other users on posts authored by `owner_id`, newest first.
    /// Anonymous comments come back without a username.
    pub fn get_comment_notices(&self, owner_id: &str, limit: usize) -> Result<Vec<CommentNoticeRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT c.id, c.post_id, c.content, c.author_id,
                        CASE WHEN c.is_anonymous THEN NULL ELSE u.username END,
                        c.created_at
                 FROM comments c
                 JOIN posts p ON c.post_id = p.id
                 LEFT JOIN users u ON c.author_id = u.id
                 WHERE p.author_id = ?1 AND c.author_id != ?1
                 ORDER BY c.created_at DESC, c.rowid DESC
                 LIMIT ?2",
            )?;
            let rows = stmt
                .query_map(rusqlite::params![owner_id, limit as i64], |row| {
                    Ok(CommentNoticeRow {
                        id: row.get(0)?,
                        post_id: row.get(1)?,
                        content: row.get(2)?,
                        actor_id: row.get(3)?,
                        actor_username: row.get(4)?,
                        created_at: row.get(5)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Unread messages addressed to `recipient_id` from other users, newest first.
    pub fn get_unread_message_notices(&self, recipient_id: &str, limit: usize) -> Result<Vec<UnreadMessageRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT m.id, m.sender_id, u.username, m.created_at
                 FROM messages m
                 LEFT JOIN users u ON m.sender_id = u.id
                 WHERE m.recipient_id = ?1 AND m.sender_id != ?1 AND m.read_at IS NULL
                 ORDER BY m.created_at DESC, m.rowid DESC
                 LIMIT ?2",
            )?;
            let rows = stmt
                .query_map(rusqlite::params![recipient_id, limit as i64], |row| {
                    Ok(UnreadMessageRow {
                        id: row.get(0)?,
                        sender_id: row.get(1)?,
                        sender_username: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Activity --

    /// Timestamps of every post and comment written by `user_id`, newest first.
    pub fn get_activity_timestamps(&self, user_id: &str) -> Result<Vec<String>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT created_at FROM posts WHERE author_id = ?1
                 UNION ALL
                 SELECT created_at FROM comments WHERE author_id = ?1
                 ORDER BY created_at DESC",
            )?;
            let rows = stmt
                .query_map([user_id], |row| row.get(0))?
                .collect::<std::result::Result<Vec<String>, _>>()?;
            Ok(rows)
        })
    }
}

fn query_user(conn: &Connection, column: &str, value: &str) -> Result<Option<UserRow>> {
    let sql = format!("SELECT id, username, password, is_admin, created_at FROM users WHERE {column} = ?1");
    conn.query_row(&sql, [value], user_from_row).optional()
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
        is_admin: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn post_from_row(row: &Row<'_>) -> rusqlite::Result<PostRow> {
    Ok(PostRow {
        id: row.get(0)?,
        author_id: row.get(1)?,
        author_username: row.get(2)?,
        content: row.get(3)?,
        is_anonymous: row.get(4)?,
        created_at: row.get(5)?,
        comment_count: row.get(6)?,
    })
}

fn comment_from_row(row: &Row<'_>) -> rusqlite::Result<CommentRow> {
    Ok(CommentRow {
        id: row.get(0)?,
        post_id: row.get(1)?,
        author_id: row.get(2)?,
        author_username: row.get(3)?,
        content: row.get(4)?,
        is_anonymous: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn message_from_row(row: &Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok(MessageRow {
        id: row.get(0)?,
        sender_id: row.get(1)?,
        sender_username: row.get(2)?,
        recipient_id: row.get(3)?,
        content: row.get(4)?,
        read_at: row.get(5)?,
        created_at: row.get(6)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn id() -> String {
        Uuid::new_v4().to_string()
    }

    fn user(db: &Database, name: &str) -> String {
        let uid = id();
        assert!(db.create_user(&uid, name, "hash", false).unwrap());
        uid
    }

    fn set_created_at(db: &Database, table: &str, row_id: &str, at: &str) {
        db.with_conn_mut(|conn| {
            conn.execute(&format!("UPDATE {table} SET created_at = ?1 WHERE id = ?2"), [at, row_id])?;
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn user_lookup() {
        let db = Database::open_in_memory().unwrap();
        let uid = user(&db, "ana");

        let row = db.get_user_by_username("ana").unwrap().unwrap();
        assert_eq!(row.id, uid);
        assert!(!row.is_admin);
        assert!(db.get_user_by_id(&uid).unwrap().is_some());
        assert!(db.get_user_by_username("nobody").unwrap().is_none());
        assert!(!db.create_user(&id(), "ana", "hash", false).unwrap());
    }

    #[test]
    fn feed_is_newest_first_with_comment_counts() {
        let db = Database::open_in_memory().unwrap();
        let ana = user(&db, "ana");
        let (old, new) = (id(), id());
        db.create_post(&old, &ana, "first", false).unwrap();
        db.create_post(&new, &ana, "second", true).unwrap();
        set_created_at(&db, "posts", &old, "2024-01-01 10:00:00");
        set_created_at(&db, "posts", &new, "2024-01-02 10:00:00");
        db.create_comment(&id(), &old, &ana, "hi", false).unwrap();

        let feed = db.get_feed(10, None).unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].id, new);
        assert!(feed[0].is_anonymous);
        assert_eq!(feed[1].comment_count, 1);

        let older = db.get_feed(10, Some(("2024-01-02 10:00:00", new.as_str()))).unwrap();
        assert_eq!(older.len(), 1);
        assert_eq!(older[0].id, old);
    }

    #[test]
    fn feed_pages_through_posts_from_one_second() {
        let db = Database::open_in_memory().unwrap();
        let ana = user(&db, "ana");
        let mut ids: Vec<String> = (0..5).map(|_| id()).collect();
        for pid in &ids {
            db.create_post(pid, &ana, "same second", false).unwrap();
            set_created_at(&db, "posts", pid, "2024-01-01 10:00:00");
        }

        let mut seen = Vec::new();
        let mut cursor: Option<(String, String)> = None;
        loop {
            let page = db
                .get_feed(2, cursor.as_ref().map(|(at, pid)| (at.as_str(), pid.as_str())))
                .unwrap();
            if page.is_empty() {
                break;
            }
            let last = page.last().unwrap();
            cursor = Some((last.created_at.clone(), last.id.clone()));
            seen.extend(page.into_iter().map(|p| p.id));
        }

        ids.sort();
        ids.reverse();
        assert_eq!(seen, ids);
    }

    #[test]
    fn toggle_reaction_adds_then_removes() {
        let db = Database::open_in_memory().unwrap();
        let ana = user(&db, "ana");
        let post = id();
        db.create_post(&post, &ana, "hello", false).unwrap();

        assert!(db.toggle_reaction(&id(), &post, &ana, "🤗").unwrap());
        assert_eq!(db.get_reactions_for_posts(&[post.clone()]).unwrap().len(), 1);
        assert!(!db.toggle_reaction(&id(), &post, &ana, "🤗").unwrap());
        assert!(db.get_reactions_for_posts(&[post]).unwrap().is_empty());
    }

    #[test]
    fn deleting_a_post_cascades() {
        let db = Database::open_in_memory().unwrap();
        let ana = user(&db, "ana");
        let post = id();
        db.create_post(&post, &ana, "hello", false).unwrap();
        db.create_comment(&id(), &post, &ana, "me too", false).unwrap();
        db.toggle_reaction(&id(), &post, &ana, "❤️").unwrap();

        assert!(db.delete_post(&post).unwrap());
        assert!(!db.delete_post(&post).unwrap());
        assert!(db.get_comments(&post).unwrap().is_empty());
        assert!(db.get_reactions_for_posts(&[post]).unwrap().is_empty());
    }

    #[test]
    fn notices_exclude_self_and_other_owners() {
        let db = Database::open_in_memory().unwrap();
        let ana = user(&db, "ana");
        let ben = user(&db, "ben");
        let anas_post = id();
        let bens_post = id();
        db.create_post(&anas_post, &ana, "mine", false).unwrap();
        db.create_post(&bens_post, &ben, "his", false).unwrap();

        db.toggle_reaction(&id(), &anas_post, &ana, "❤️").unwrap();
        db.toggle_reaction(&id(), &anas_post, &ben, "❤️").unwrap();
        db.toggle_reaction(&id(), &bens_post, &ana, "❤️").unwrap();
        db.create_comment(&id(), &anas_post, &ana, "self", false).unwrap();
        db.create_comment(&id(), &anas_post, &ben, "secret", true).unwrap();

        let reactions = db.get_reaction_notices(&ana, 20).unwrap();
        assert_eq!(reactions.len(), 1);
        assert_eq!(reactions[0].actor_id, ben);
        assert_eq!(reactions[0].actor_username.as_deref(), Some("ben"));

        let comments = db.get_comment_notices(&ana, 20).unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].actor_id, ben);
        assert!(comments[0].actor_username.is_none());
    }

    #[test]
    fn unread_messages_and_mark_read() {
        let db = Database::open_in_memory().unwrap();
        let ana = user(&db, "ana");
        let ben = user(&db, "ben");
        let first = id();
        db.insert_message(&first, &ben, &ana, "hey").unwrap();
        db.insert_message(&id(), &ben, &ana, "you ok?").unwrap();
        db.insert_message(&id(), &ana, &ben, "yes").unwrap();

        assert_eq!(db.get_unread_message_notices(&ana, 10).unwrap().len(), 2);
        assert_eq!(db.get_conversation(&ana, &ben, 10).unwrap().len(), 3);
        assert_eq!(db.get_inbox(&ana, 10).unwrap().len(), 2);

        // Only the recipient can mark a message read.
        assert!(!db.mark_message_read(&first, &ben).unwrap());
        assert!(db.mark_message_read(&first, &ana).unwrap());
        assert!(!db.mark_message_read(&first, &ana).unwrap());
        assert_eq!(db.get_unread_message_notices(&ana, 10).unwrap().len(), 1);

        assert_eq!(db.mark_all_messages_read(&ana).unwrap(), 1);
        assert!(db.get_unread_message_notices(&ana, 10).unwrap().is_empty());
    }

    #[test]
    fn activity_merges_posts_and_comments_descending() {
        let db = Database::open_in_memory().unwrap();
        let ana = user(&db, "ana");
        let (post, comment) = (id(), id());
        db.create_post(&post, &ana, "day one", false).unwrap();
        db.create_comment(&comment, &post, &ana, "day two", false).unwrap();
        set_created_at(&db, "posts", &post, "2024-01-01 09:00:00");
        set_created_at(&db, "comments", &comment, "2024-01-02 09:00:00");

        let activity = db.get_activity_timestamps(&ana).unwrap();
        assert_eq!(activity, vec!["2024-01-02 09:00:00", "2024-01-01 09:00:00"]);
    }
}
