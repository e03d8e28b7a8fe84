pub mod categories;
pub mod comments;
pub mod endpoints;
pub mod error;
pub mod reviews;
pub mod users;

pub use error::ApiError;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get},
};

use meeple_db::Database;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
}

/// The full `/api` surface. Kept separate from the binary so the test
/// suites can drive the router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(endpoints::get_endpoints))
        .route("/api/categories", get(categories::get_categories))
        .route("/api/reviews", get(reviews::get_reviews))
        .route(
            "/api/reviews/{review_id}",
            get(reviews::get_review).patch(reviews::patch_votes),
        )
        .route(
            "/api/reviews/{review_id}/comments",
            get(comments::get_review_comments).post(comments::post_comment),
        )
        .route("/api/users", get(users::get_users))
        .route("/api/comments/{comment_id}", delete(comments::delete_comment))
        .with_state(state)
}

/// Path ids arrive as opaque strings; a value that is not a number maps to
/// the id-specific 400. The PATCH route does its own parse because its 400
/// message also covers the vote amount.
pub(crate) fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId)
}
