use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A labeled genre/tag applied to reviews. Read-only from the API's
/// perspective; rows are seeded externally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub description: String,
}

/// A board-game review, the primary content entity. Mutable only via the
/// vote update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub review_id: i64,
    pub title: String,
    pub review_body: String,
    pub designer: String,
    pub review_img_url: String,
    pub votes: i64,
    pub category: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
}

/// A review as returned by the listing endpoint: every review field plus
/// the derived comment count. `comment_count` is computed at read time and
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewWithCommentCount {
    pub review_id: i64,
    pub title: String,
    pub review_body: String,
    pub designer: String,
    pub review_img_url: String,
    pub votes: i64,
    pub category: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub comment_count: i64,
}

/// A user-authored reply attached to a review. Created and deleted, never
/// updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: i64,
    pub body: String,
    pub votes: i64,
    pub author: String,
    pub review_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}
