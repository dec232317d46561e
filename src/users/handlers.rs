use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::ApiError,
    state::AppState,
    users::{
        dto::{MessageResponse, UserView},
        extractors::ValidUser,
        services,
    },
};

pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

// Only integer ids name a user; anything else is reported like a missing one.
fn parse_id(raw: &str, not_found: fn(&str) -> ApiError) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| not_found(raw))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserView>>, ApiError> {
    let users = services::list_users(state.users.as_ref()).await?;
    Ok(Json(users.into_iter().map(UserView::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidUser(payload): ValidUser,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let user = services::create_user(state.users.as_ref(), &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!("{} was added!", user.email))),
    ))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<UserView>, ApiError> {
    let id = parse_id(&raw_id, |raw| services::not_found(raw))?;
    let user = services::get_user(state.users.as_ref(), id).await?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidUser(payload): ValidUser,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&raw_id, |raw| services::not_found(raw))?;
    let user = services::update_user(state.users.as_ref(), id, &payload).await?;
    Ok(Json(MessageResponse::new(format!(
        "User {} was updated!",
        user.id
    ))))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&raw_id, |raw| services::not_found_on_delete(raw))?;
    let user = services::delete_user(state.users.as_ref(), id).await?;
    Ok(Json(MessageResponse::new(format!(
        "{} was removed!",
        user.email
    ))))
}
