use std::fmt::Display;

use tracing::{info, warn};

use crate::error::ApiError;
use crate::users::dto::UserPayload;
use crate::users::repo::UserStore;
use crate::users::repo_types::{StoreError, User};

pub(crate) fn not_found(id: impl Display) -> ApiError {
    ApiError::NotFound(format!("User {id} does not exist"))
}

pub(crate) fn not_found_on_delete(id: impl Display) -> ApiError {
    ApiError::NotFound(format!("User {id} does not exist!"))
}

pub async fn list_users(store: &dyn UserStore) -> Result<Vec<User>, ApiError> {
    Ok(store.list_all().await?)
}

pub async fn get_user(store: &dyn UserStore, id: i32) -> Result<User, ApiError> {
    store.get_by_id(id).await?.ok_or_else(|| {
        warn!(user_id = id, "user not found");
        not_found(id)
    })
}

/// Inserts a new user unless the email is taken. The pre-check gives the common
/// case a clean 409; the unique index catches concurrent inserts that slip past it.
pub async fn create_user(store: &dyn UserStore, payload: &UserPayload) -> Result<User, ApiError> {
    if store.get_by_email(&payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already exists");
        return Err(ApiError::Conflict);
    }

    let user = store.insert(&payload.username, &payload.email).await?;
    info!(user_id = user.id, email = %user.email, "user created");
    Ok(user)
}

/// Replaces username and email. The email may stay the same; it conflicts only
/// when another user owns it.
pub async fn update_user(
    store: &dyn UserStore,
    id: i32,
    payload: &UserPayload,
) -> Result<User, ApiError> {
    let user = get_user(store, id).await?;

    if let Some(owner) = store.get_by_email(&payload.email).await? {
        if owner.id != user.id {
            warn!(user_id = id, owner_id = owner.id, email = %payload.email, "email already exists");
            return Err(ApiError::Conflict);
        }
    }

    let updated = store
        .update(&user, &payload.username, &payload.email)
        .await
        .map_err(|e| match e {
            StoreError::NotFound => {
                warn!(user_id = id, "user removed before update");
                not_found(id)
            }
            other => other.into(),
        })?;
    info!(user_id = updated.id, "user updated");
    Ok(updated)
}

pub async fn delete_user(store: &dyn UserStore, id: i32) -> Result<User, ApiError> {
    let Some(user) = store.get_by_id(id).await? else {
        warn!(user_id = id, "user not found");
        return Err(not_found_on_delete(id));
    };

    store.delete(&user).await?;
    info!(user_id = user.id, email = %user.email, "user removed");
    Ok(user)
}
