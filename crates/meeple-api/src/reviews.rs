use axum::{
    Json,
    extract::{Path, Query, State},
};

use meeple_db::{SortColumn, SortOrder};
use meeple_types::api::{PatchVotesRequest, ReviewResponse, ReviewsQuery, ReviewsResponse};

use crate::{ApiError, AppState, parse_id};

pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Json<ReviewResponse>, ApiError> {
    let id = parse_id(&review_id)?;
    let review = state.db.get_review(id)?.into();
    Ok(Json(ReviewResponse { review }))
}

pub async fn get_reviews(
    State(state): State<AppState>,
    Query(query): Query<ReviewsQuery>,
) -> Result<Json<ReviewsResponse>, ApiError> {
    let sort_by = match query.sort_by.as_deref() {
        Some(raw) => raw.parse().map_err(|_| ApiError::InvalidSortColumn)?,
        None => SortColumn::ReviewId,
    };
    let order = match query.sort_order.as_deref() {
        Some(raw) => raw.parse().map_err(|_| ApiError::InvalidSortOrder)?,
        None => SortOrder::default(),
    };

    let reviews = state
        .db
        .list_reviews(query.category.as_deref(), sort_by, order)?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ReviewsResponse { reviews }))
}

pub async fn patch_votes(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    Json(req): Json<PatchVotesRequest>,
) -> Result<Json<ReviewResponse>, ApiError> {
    // One 400 message covers both a malformed id and a malformed delta on
    // this route.
    let id: i64 = review_id
        .parse()
        .map_err(|_| ApiError::InvalidVotePayload)?;
    let delta = req
        .inc_votes
        .as_ref()
        .and_then(|value| value.as_i64())
        .ok_or(ApiError::InvalidVotePayload)?;

    let review = state.db.update_votes(id, delta)?.into();
    Ok(Json(ReviewResponse { review }))
}
