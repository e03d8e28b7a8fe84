use axum::{Json, extract::State};

use meeple_types::api::UsersResponse;

use crate::{ApiError, AppState};

pub async fn get_users(State(state): State<AppState>) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.db.list_users()?.into_iter().map(Into::into).collect();
    Ok(Json(UsersResponse { users }))
}
