use axum::{
    extract::{Path, State},
    Extension, Json,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::housekeeping_task::{self, TaskStatus};
use crate::entities::{inventory_item, room, user};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;
use crate::utils::tenant::resolve_hotel;
use crate::AppState;

// ============ Housekeeping ============

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub room_id: i32,
    pub assigned_to: Option<Uuid>,
    pub status: Option<TaskStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: i32,
    pub room_id: i32,
    pub room_number: String,
    pub assigned_to: Option<Uuid>,
    pub assigned_to_name: Option<String>,
    pub status: TaskStatus,
    pub notes: Option<String>,
}

/// List housekeeping tasks with room and assignee display fields
pub async fn list_tasks(State(state): State<AppState>) -> AppResult<Json<Vec<TaskResponse>>> {
    let tasks = housekeeping_task::Entity::find().all(&state.db).await?;
    let rooms = room::Entity::find().all(&state.db).await?;
    let users = user::Entity::find().all(&state.db).await?;

    let responses = tasks
        .into_iter()
        .map(|t| {
            let room_number = rooms
                .iter()
                .find(|r| r.id == t.room_id)
                .map(|r| r.room_number.clone())
                .unwrap_or_default();
            let assigned_to_name = t.assigned_to.and_then(|uid| {
                users
                    .iter()
                    .find(|u| u.id == uid)
                    .map(|u| format!("{} {}", u.first_name, u.last_name))
            });
            TaskResponse {
                id: t.id,
                room_id: t.room_id,
                room_number,
                assigned_to: t.assigned_to,
                assigned_to_name,
                status: t.status,
                notes: t.notes,
            }
        })
        .collect();

    Ok(Json(responses))
}

/// Create a housekeeping task. A new task defaults to DIRTY, the state
/// that triggers cleaning.
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskRequest>,
) -> AppResult<Json<housekeeping_task::Model>> {
    room::Entity::find_by_id(payload.room_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    if let Some(user_id) = payload.assigned_to {
        user::Entity::find_by_id(user_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignee not found".to_string()))?;
    }

    let created = housekeeping_task::ActiveModel {
        room_id: Set(payload.room_id),
        assigned_to: Set(payload.assigned_to),
        status: Set(payload.status.unwrap_or(TaskStatus::Dirty)),
        notes: Set(payload.notes),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub assigned_to: Option<Uuid>,
    pub status: Option<TaskStatus>,
    pub notes: Option<String>,
}

/// Update a housekeeping task
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTaskRequest>,
) -> AppResult<Json<housekeeping_task::Model>> {
    let existing = housekeeping_task::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

    let mut active: housekeeping_task::ActiveModel = existing.into();
    if let Some(v) = payload.assigned_to {
        active.assigned_to = Set(Some(v));
    }
    if let Some(v) = payload.status {
        active.status = Set(v);
    }
    if let Some(v) = payload.notes {
        active.notes = Set(Some(v));
    }

    Ok(Json(active.update(&state.db).await?))
}

/// Delete a housekeeping task
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = housekeeping_task::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Task not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Task deleted" })))
}

// ============ Inventory ============

#[derive(Debug, Deserialize)]
pub struct CreateInventoryRequest {
    pub hotel_id: Option<i32>,
    pub name: String,
    pub stock_level: Option<i32>,
    pub low_stock_threshold: Option<i32>,
}

/// List inventory items
pub async fn list_inventory(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<inventory_item::Model>>> {
    Ok(Json(inventory_item::Entity::find().all(&state.db).await?))
}

/// Create an inventory item under the caller's hotel
pub async fn create_inventory(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateInventoryRequest>,
) -> AppResult<Json<inventory_item::Model>> {
    let hotel_id = resolve_hotel(&state.db, &claims, payload.hotel_id).await?;

    let created = inventory_item::ActiveModel {
        hotel_id: Set(hotel_id),
        name: Set(payload.name),
        stock_level: Set(payload.stock_level.unwrap_or(0)),
        low_stock_threshold: Set(payload.low_stock_threshold.unwrap_or(10)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
pub struct UpdateInventoryRequest {
    pub name: Option<String>,
    pub stock_level: Option<i32>,
    pub low_stock_threshold: Option<i32>,
}

/// Update an inventory item
pub async fn update_inventory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInventoryRequest>,
) -> AppResult<Json<inventory_item::Model>> {
    let existing = inventory_item::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Inventory item not found".to_string()))?;

    let mut active: inventory_item::ActiveModel = existing.into();
    if let Some(v) = payload.name {
        active.name = Set(v);
    }
    if let Some(v) = payload.stock_level {
        active.stock_level = Set(v);
    }
    if let Some(v) = payload.low_stock_threshold {
        active.low_stock_threshold = Set(v);
    }

    Ok(Json(active.update(&state.db).await?))
}

/// Delete an inventory item
pub async fn delete_inventory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = inventory_item::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Inventory item not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Inventory item deleted" })))
}
