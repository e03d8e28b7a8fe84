use axum::{Json, extract::State};

use meeple_types::api::CategoriesResponse;

use crate::{ApiError, AppState};

pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .db
        .list_categories()?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(CategoriesResponse { categories }))
}
