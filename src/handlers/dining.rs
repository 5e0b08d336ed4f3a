use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::entities::food_item::{self, FoodCategory};
use crate::entities::food_order::{self, OrderStatus};
use crate::entities::user::UserRole;
use crate::entities::{guest, hotel};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;
use crate::utils::tenant::resolve_hotel;
use crate::AppState;

// ============ Food items ============

#[derive(Debug, Deserialize)]
pub struct CreateFoodItemRequest {
    pub hotel_id: Option<i32>,
    pub name: String,
    pub category: FoodCategory,
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub available: Option<bool>,
}

/// List menu items, optionally only the currently available ones
pub async fn list_food_items(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<Vec<food_item::Model>>> {
    let mut finder = food_item::Entity::find();
    if let Some(available) = query.available {
        finder = finder.filter(food_item::Column::IsAvailable.eq(available));
    }
    Ok(Json(finder.all(&state.db).await?))
}

/// Add an item to the menu under the caller's hotel
pub async fn create_food_item(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateFoodItemRequest>,
) -> AppResult<Json<food_item::Model>> {
    let hotel_id = resolve_hotel(&state.db, &claims, payload.hotel_id).await?;

    if payload.price <= Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Price must be greater than zero".to_string(),
        ));
    }

    let created = food_item::ActiveModel {
        hotel_id: Set(hotel_id),
        name: Set(payload.name),
        category: Set(payload.category),
        price: Set(payload.price),
        description: Set(payload.description),
        image_url: Set(payload.image_url),
        is_available: Set(payload.is_available.unwrap_or(true)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
pub struct UpdateFoodItemRequest {
    pub name: Option<String>,
    pub category: Option<FoodCategory>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

/// Update a menu item
pub async fn update_food_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFoodItemRequest>,
) -> AppResult<Json<food_item::Model>> {
    let existing = food_item::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Food item not found".to_string()))?;

    let mut active: food_item::ActiveModel = existing.into();
    if let Some(v) = payload.name {
        active.name = Set(v);
    }
    if let Some(v) = payload.category {
        active.category = Set(v);
    }
    if let Some(v) = payload.price {
        if v <= Decimal::ZERO {
            return Err(AppError::BadRequest(
                "Price must be greater than zero".to_string(),
            ));
        }
        active.price = Set(v);
    }
    if let Some(v) = payload.description {
        active.description = Set(Some(v));
    }
    if let Some(v) = payload.image_url {
        active.image_url = Set(Some(v));
    }
    if let Some(v) = payload.is_available {
        active.is_available = Set(v);
    }

    Ok(Json(active.update(&state.db).await?))
}

/// Remove a menu item
pub async fn delete_food_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = food_item::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Food item not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Food item deleted" })))
}

// ============ Food orders ============

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub hotel_id: i32,
    pub guest_id: i32,
    pub room_number: String,
    pub items: serde_json::Value,
    pub total_price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub guest: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    #[serde(flatten)]
    pub order: food_order::Model,
    pub guest_name: String,
}

/// List room-service orders, optionally filtered by guest
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<Vec<OrderResponse>>> {
    let mut finder = food_order::Entity::find().order_by_desc(food_order::Column::CreatedAt);
    if let Some(guest_id) = query.guest {
        finder = finder.filter(food_order::Column::GuestId.eq(guest_id));
    }
    let orders = finder.all(&state.db).await?;
    let guests = guest::Entity::find().all(&state.db).await?;

    let responses = orders
        .into_iter()
        .map(|o| {
            let guest_name = guests
                .iter()
                .find(|g| g.id == o.guest_id)
                .map(|g| g.name.clone())
                .unwrap_or_default();
            OrderResponse { order: o, guest_name }
        })
        .collect();

    Ok(Json(responses))
}

/// Place a room-service order. A guest may only order on their own
/// behalf; staff may place orders for any guest of their hotel.
pub async fn create_order(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<food_order::Model>> {
    let ordering_guest = guest::Entity::find_by_id(payload.guest_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;

    let hotel_id = if claims.role == UserRole::Guest {
        if ordering_guest.user_id != Some(claims.sub) {
            return Err(AppError::Forbidden(
                "Guests can only place orders for themselves".to_string(),
            ));
        }
        hotel::Entity::find_by_id(payload.hotel_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;
        payload.hotel_id
    } else {
        resolve_hotel(&state.db, &claims, Some(payload.hotel_id)).await?
    };

    if payload.total_price <= Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Order total must be greater than zero".to_string(),
        ));
    }
    if !payload.items.is_array() {
        return Err(AppError::BadRequest(
            "Order items must be a list".to_string(),
        ));
    }

    let created = food_order::ActiveModel {
        hotel_id: Set(hotel_id),
        guest_id: Set(payload.guest_id),
        room_number: Set(payload.room_number),
        items: Set(payload.items),
        total_price: Set(payload.total_price),
        status: Set(OrderStatus::Pending),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub status: Option<OrderStatus>,
    pub room_number: Option<String>,
}

/// Update an order, typically moving it through the kitchen workflow
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderRequest>,
) -> AppResult<Json<food_order::Model>> {
    let existing = food_order::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    let mut active: food_order::ActiveModel = existing.into();
    if let Some(v) = payload.status {
        active.status = Set(v);
    }
    if let Some(v) = payload.room_number {
        active.room_number = Set(v);
    }

    Ok(Json(active.update(&state.db).await?))
}

/// Delete an order
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = food_order::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Order not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Order deleted" })))
}
