//! The terminal error translator: every handler returns `Result<_,
//! ApiError>` and this `IntoResponse` impl is the only place HTTP status
//! codes are decided from failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use meeple_db::StoreError;
use meeple_types::api::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-numeric path parameter on the non-vote routes.
    #[error("Not a valid ID, must be a number")]
    InvalidId,

    /// Non-numeric review id or `inc_votes` on the vote update.
    #[error("Not a valid review_id / no. of votes")]
    InvalidVotePayload,

    /// `sortBy` value outside the allow-list.
    #[error("Invalid sortBy query")]
    InvalidSortColumn,

    /// `sortOrder` value outside the allow-list.
    #[error("Invalid sortOrder query")]
    InvalidSortOrder,

    /// Required comment field absent from the request body.
    #[error("Malformed body / missing required fields")]
    MissingFields,

    #[error("Cannot decrement votes below zero")]
    VoteBelowZero,

    #[error("No review found with review_id: {0}")]
    ReviewNotFound(i64),

    #[error("Review_id does not exist")]
    VoteTargetMissing,

    #[error("Review_id does not exist in database")]
    UnknownReview,

    #[error("Username does not exist in database")]
    UnknownUser,

    #[error("No comment found with comment_id: {0}")]
    CommentNotFound(i64),

    /// Unexpected store failure. The cause is logged server-side; the
    /// client only ever sees the generic message.
    #[error("Server Error!")]
    Internal(#[source] StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ReviewNotFound(id) => ApiError::ReviewNotFound(id),
            StoreError::CommentNotFound(id) => ApiError::CommentNotFound(id),
            StoreError::VoteTargetMissing => ApiError::VoteTargetMissing,
            StoreError::VoteBelowZero => ApiError::VoteBelowZero,
            StoreError::UnknownReview => ApiError::UnknownReview,
            StoreError::UnknownUser => ApiError::UnknownUser,
            err @ (StoreError::Sqlite(_) | StoreError::Internal(_)) => ApiError::Internal(err),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId
            | ApiError::InvalidVotePayload
            | ApiError::InvalidSortColumn
            | ApiError::InvalidSortOrder
            | ApiError::MissingFields
            | ApiError::VoteBelowZero => StatusCode::BAD_REQUEST,
            ApiError::ReviewNotFound(_)
            | ApiError::VoteTargetMissing
            | ApiError::UnknownReview
            | ApiError::UnknownUser
            | ApiError::CommentNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(cause) = &self {
            error!("store failure: {cause}");
        }
        let body = ErrorBody {
            msg: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
