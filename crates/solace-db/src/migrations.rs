use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);")?;

    let version: i64 =
        conn.query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |r| r.get(0))?;

    if version < 1 {
        info!("Running migration v1 (initial schema)");
        conn.execute_batch(
            "
            CREATE TABLE users (
                id          TEXT PRIMARY KEY,
                username    TEXT NOT NULL UNIQUE,
                password    TEXT NOT NULL,
                is_admin    INTEGER NOT NULL DEFAULT 0,
                created_at  TEXT NOT NULL DEFAULT (datetime('now'))
            );

            CREATE TABLE posts (
                id            TEXT PRIMARY KEY,
                author_id     TEXT NOT NULL REFERENCES users(id),
                content       TEXT NOT NULL,
                is_anonymous  INTEGER NOT NULL DEFAULT 0,
                created_at    TEXT NOT NULL DEFAULT (datetime('now'))
            );

            CREATE INDEX idx_posts_created ON posts(created_at);
            CREATE INDEX idx_posts_author ON posts(author_id, created_at);

            CREATE TABLE comments (
                id            TEXT PRIMARY KEY,
                post_id       TEXT NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
                author_id     TEXT NOT NULL REFERENCES users(id),
                content       TEXT NOT NULL,
                is_anonymous  INTEGER NOT NULL DEFAULT 0,
                created_at    TEXT NOT NULL DEFAULT (datetime('now'))
            );

            CREATE INDEX idx_comments_post ON comments(post_id, created_at);
            CREATE INDEX idx_comments_author ON comments(author_id, created_at);

            CREATE TABLE reactions (
                id          TEXT PRIMARY KEY,
                post_id     TEXT NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
                user_id     TEXT NOT NULL REFERENCES users(id),
                emoji       TEXT NOT NULL,
                created_at  TEXT NOT NULL DEFAULT (datetime('now')),
                UNIQUE(post_id, user_id, emoji)
            );

            CREATE INDEX idx_reactions_post ON reactions(post_id);

            CREATE TABLE messages (
                id            TEXT PRIMARY KEY,
                sender_id     TEXT NOT NULL REFERENCES users(id),
                recipient_id  TEXT NOT NULL REFERENCES users(id),
                content       TEXT NOT NULL,
                read_at       TEXT,
                created_at    TEXT NOT NULL DEFAULT (datetime('now'))
            );

            CREATE INDEX idx_messages_recipient ON messages(recipient_id, read_at, created_at);

            INSERT INTO schema_version (version) VALUES (1);
            ",
        )?;
    }

    info!("Database migrations complete");
    Ok(())
}
