//! Database row types — these map directly to SQLite rows.
//! Distinct from the meeple-types API models to keep the DB layer
//! independent; timestamps stay as TEXT here and are parsed once at the
//! conversion boundary.

use chrono::{DateTime, Utc};
use meeple_types::models::{Category, Comment, Review, ReviewWithCommentCount, User};
use tracing::warn;

pub struct CategoryRow {
    pub slug: String,
    pub description: String,
}

pub struct ReviewRow {
    pub review_id: i64,
    pub title: String,
    pub review_body: String,
    pub designer: String,
    pub review_img_url: String,
    pub votes: i64,
    pub category: String,
    pub owner: String,
    pub created_at: String,
}

pub struct ReviewWithCommentsRow {
    pub review: ReviewRow,
    pub comment_count: i64,
}

pub struct CommentRow {
    pub comment_id: i64,
    pub body: String,
    pub votes: i64,
    pub author: String,
    pub review_id: i64,
    pub created_at: String,
}

pub struct UserRow {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

/// Timestamps are stored as RFC 3339 TEXT. SQLite's own datetime() default
/// writes `YYYY-MM-DD HH:MM:SS` without a timezone, so fall back to naive
/// UTC for rows that predate the ISO default.
fn parse_timestamp(raw: &str, context: &str) -> DateTime<Utc> {
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            warn!("Corrupt created_at '{}' on {}: {}", raw, context, e);
            DateTime::default()
        })
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            slug: row.slug,
            description: row.description,
        }
    }
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        let created_at = parse_timestamp(&row.created_at, &format!("review {}", row.review_id));
        Review {
            review_id: row.review_id,
            title: row.title,
            review_body: row.review_body,
            designer: row.designer,
            review_img_url: row.review_img_url,
            votes: row.votes,
            category: row.category,
            owner: row.owner,
            created_at,
        }
    }
}

impl From<ReviewWithCommentsRow> for ReviewWithCommentCount {
    fn from(row: ReviewWithCommentsRow) -> Self {
        let review = Review::from(row.review);
        ReviewWithCommentCount {
            review_id: review.review_id,
            title: review.title,
            review_body: review.review_body,
            designer: review.designer,
            review_img_url: review.review_img_url,
            votes: review.votes,
            category: review.category,
            owner: review.owner,
            created_at: review.created_at,
            comment_count: row.comment_count,
        }
    }
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        let created_at = parse_timestamp(&row.created_at, &format!("comment {}", row.comment_id));
        Comment {
            comment_id: row.comment_id,
            body: row.body,
            votes: row.votes,
            author: row.author,
            review_id: row.review_id,
            created_at,
        }
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            username: row.username,
            name: row.name,
            avatar_url: row.avatar_url,
        }
    }
}
