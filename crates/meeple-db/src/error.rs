use thiserror::Error;

/// Failures raised by the query layer. Each variant carries enough shape
/// for the HTTP layer to pick a status code and message without inspecting
/// SQL error text.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Well-formed review id with no matching row (lookups).
    #[error("no review with id {0}")]
    ReviewNotFound(i64),

    /// Well-formed comment id with no matching row (deletion).
    #[error("no comment with id {0}")]
    CommentNotFound(i64),

    /// Vote update targeted a review id with no matching row.
    #[error("vote update target does not exist")]
    VoteTargetMissing,

    /// Applying the delta would drive the vote count negative; the row is
    /// left unchanged.
    #[error("vote decrement below zero rejected")]
    VoteBelowZero,

    /// Comment insertion referenced a review that does not exist.
    #[error("referenced review does not exist")]
    UnknownReview,

    /// Comment insertion referenced a username that does not exist.
    #[error("referenced user does not exist")]
    UnknownUser,

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("internal store error: {0}")]
    Internal(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
