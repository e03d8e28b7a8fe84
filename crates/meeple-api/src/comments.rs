use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use meeple_types::api::{CommentResponse, CommentsResponse, CreateCommentRequest};

use crate::{ApiError, AppState, parse_id};

/// The review's existence is confirmed by the query layer before its
/// comments are fetched, so a request against a nonexistent review is a 404
/// rather than an empty array.
pub async fn get_review_comments(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Json<CommentsResponse>, ApiError> {
    let id = parse_id(&review_id)?;
    let comments = state
        .db
        .get_review_comments(id)?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(CommentsResponse { comments }))
}

pub async fn post_comment(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let id = parse_id(&review_id)?;
    let (username, body) = match (req.username, req.body) {
        (Some(username), Some(body)) => (username, body),
        _ => return Err(ApiError::MissingFields),
    };

    let comment = state.db.insert_comment(id, &username, &body)?.into();
    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&comment_id)?;
    state.db.delete_comment(id)?;
    Ok(StatusCode::NO_CONTENT)
}
