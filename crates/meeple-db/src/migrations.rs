use rusqlite::Connection;
use tracing::info;

use crate::error::StoreResult;

pub fn run(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS categories (
            slug        TEXT PRIMARY KEY,
            description TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS users (
            username    TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            avatar_url  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS reviews (
            review_id       INTEGER PRIMARY KEY AUTOINCREMENT,
            title           TEXT NOT NULL,
            review_body     TEXT NOT NULL,
            designer        TEXT NOT NULL,
            review_img_url  TEXT NOT NULL,
            votes           INTEGER NOT NULL DEFAULT 0,
            category        TEXT NOT NULL REFERENCES categories(slug),
            owner           TEXT NOT NULL REFERENCES users(username),
            created_at      TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS comments (
            comment_id  INTEGER PRIMARY KEY AUTOINCREMENT,
            body        TEXT NOT NULL,
            votes       INTEGER NOT NULL DEFAULT 0,
            author      TEXT NOT NULL REFERENCES users(username),
            review_id   INTEGER NOT NULL REFERENCES reviews(review_id),
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_reviews_category
            ON reviews(category);

        CREATE INDEX IF NOT EXISTS idx_comments_review
            ON comments(review_id, created_at);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
