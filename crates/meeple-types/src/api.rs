use serde::{Deserialize, Serialize};

use crate::models::{Category, Comment, Review, ReviewWithCommentCount, User};

// -- Requests --

/// Body of `POST /api/reviews/{review_id}/comments`.
///
/// Both fields are required but modeled as `Option` so a missing field
/// surfaces as the API's own "malformed body" response instead of a
/// framework rejection. Unknown fields are ignored, not stored.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

/// Body of `PATCH /api/reviews/{review_id}`.
///
/// `inc_votes` is kept as raw JSON so a non-integer value (e.g. `"four"`)
/// produces the vote-specific 400 message rather than a deserialization
/// error.
#[derive(Debug, Deserialize)]
pub struct PatchVotesRequest {
    #[serde(default)]
    pub inc_votes: Option<serde_json::Value>,
}

/// Query string of `GET /api/reviews`.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewsQuery {
    pub category: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

// -- Responses --
// Every success body is an envelope with a single key naming the resource.

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<ReviewWithCommentCount>,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: Review,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct EndpointsResponse {
    pub endpoints: serde_json::Value,
}

/// Shape of every error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub msg: String,
}
