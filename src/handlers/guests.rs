use axum::{
    extract::{Path, Query, State},
    Json,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::guest;
use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GuestListQuery {
    pub email: Option<String>,
    pub user: Option<Uuid>,
}

/// List guests, optionally filtered by email or linked user account
pub async fn list_guests(
    State(state): State<AppState>,
    Query(query): Query<GuestListQuery>,
) -> AppResult<Json<Vec<guest::Model>>> {
    let mut find = guest::Entity::find();
    if let Some(email) = query.email {
        find = find.filter(guest::Column::Email.eq(email.to_lowercase()));
    }
    if let Some(user_id) = query.user {
        find = find.filter(guest::Column::UserId.eq(user_id));
    }
    Ok(Json(find.all(&state.db).await?))
}

#[derive(Debug, Deserialize)]
pub struct CreateGuestRequest {
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub preferences: Option<serde_json::Value>,
}

/// Create a guest. Emails are unique across the system.
pub async fn create_guest(
    State(state): State<AppState>,
    Json(payload): Json<CreateGuestRequest>,
) -> AppResult<Json<guest::Model>> {
    let email = payload.email.to_lowercase();

    let existing = guest::Entity::find()
        .filter(guest::Column::Email.eq(&email))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let created = guest::ActiveModel {
        user_id: Set(payload.user_id),
        name: Set(payload.name),
        email: Set(email),
        phone: Set(payload.phone),
        address: Set(payload.address),
        preferences: Set(payload.preferences.unwrap_or_else(|| serde_json::json!({}))),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created))
}

/// Get guest details
pub async fn get_guest(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<guest::Model>> {
    guest::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct UpdateGuestRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub preferences: Option<serde_json::Value>,
}

/// Update a guest
pub async fn update_guest(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGuestRequest>,
) -> AppResult<Json<guest::Model>> {
    let existing = guest::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;

    let mut active: guest::ActiveModel = existing.into();
    if let Some(v) = payload.name {
        active.name = Set(v);
    }
    if let Some(v) = payload.phone {
        active.phone = Set(v);
    }
    if let Some(v) = payload.address {
        active.address = Set(Some(v));
    }
    if let Some(v) = payload.preferences {
        active.preferences = Set(v);
    }

    Ok(Json(active.update(&state.db).await?))
}

/// Delete a guest
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = guest::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Guest not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Guest deleted" })))
}
