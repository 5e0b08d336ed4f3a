use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::NaiveTime;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::room::{self, RoomStatus};
use crate::entities::{amenity, hotel, room_type, room_type_amenity};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;
use crate::utils::tenant::resolve_hotel;
use crate::AppState;

// ============ Hotels ============

#[derive(Debug, Deserialize)]
pub struct CreateHotelRequest {
    pub name: String,
    pub location: String,
    pub admin_user_id: Uuid,
    pub logo_url: Option<String>,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub default_currency: Option<String>,
    pub tax_rate: Option<Decimal>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
}

/// List hotels
pub async fn list_hotels(State(state): State<AppState>) -> AppResult<Json<Vec<hotel::Model>>> {
    Ok(Json(hotel::Entity::find().all(&state.db).await?))
}

/// Create a hotel
pub async fn create_hotel(
    State(state): State<AppState>,
    Json(payload): Json<CreateHotelRequest>,
) -> AppResult<Json<hotel::Model>> {
    let created = hotel::ActiveModel {
        name: Set(payload.name),
        location: Set(payload.location),
        admin_user_id: Set(payload.admin_user_id),
        logo_url: Set(payload.logo_url),
        check_in_time: Set(payload
            .check_in_time
            .unwrap_or_else(|| NaiveTime::from_hms_opt(14, 0, 0).unwrap())),
        check_out_time: Set(payload
            .check_out_time
            .unwrap_or_else(|| NaiveTime::from_hms_opt(11, 0, 0).unwrap())),
        default_currency: Set(payload.default_currency.unwrap_or_else(|| "LKR".to_string())),
        tax_rate: Set(payload.tax_rate.unwrap_or(Decimal::ZERO)),
        maintenance_mode: Set(false),
        contact_phone: Set(payload.contact_phone),
        contact_email: Set(payload.contact_email),
        facebook_url: Set(None),
        instagram_url: Set(None),
        cancellation_policy: Set(None),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created))
}

/// Get hotel settings
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<hotel::Model>> {
    hotel::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct UpdateHotelRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub logo_url: Option<String>,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub default_currency: Option<String>,
    pub tax_rate: Option<Decimal>,
    pub maintenance_mode: Option<bool>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub cancellation_policy: Option<String>,
}

/// Update hotel settings
pub async fn update_hotel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateHotelRequest>,
) -> AppResult<Json<hotel::Model>> {
    let existing = hotel::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;

    let mut active: hotel::ActiveModel = existing.into();
    if let Some(v) = payload.name {
        active.name = Set(v);
    }
    if let Some(v) = payload.location {
        active.location = Set(v);
    }
    if let Some(v) = payload.logo_url {
        active.logo_url = Set(Some(v));
    }
    if let Some(v) = payload.check_in_time {
        active.check_in_time = Set(v);
    }
    if let Some(v) = payload.check_out_time {
        active.check_out_time = Set(v);
    }
    if let Some(v) = payload.default_currency {
        active.default_currency = Set(v);
    }
    if let Some(v) = payload.tax_rate {
        active.tax_rate = Set(v);
    }
    if let Some(v) = payload.maintenance_mode {
        active.maintenance_mode = Set(v);
    }
    if let Some(v) = payload.contact_phone {
        active.contact_phone = Set(Some(v));
    }
    if let Some(v) = payload.contact_email {
        active.contact_email = Set(Some(v));
    }
    if let Some(v) = payload.facebook_url {
        active.facebook_url = Set(Some(v));
    }
    if let Some(v) = payload.instagram_url {
        active.instagram_url = Set(Some(v));
    }
    if let Some(v) = payload.cancellation_policy {
        active.cancellation_policy = Set(Some(v));
    }

    Ok(Json(active.update(&state.db).await?))
}

/// Delete a hotel
pub async fn delete_hotel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = hotel::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Hotel not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Hotel deleted" })))
}

// ============ Amenities ============

#[derive(Debug, Deserialize)]
pub struct AmenityRequest {
    pub name: String,
    pub icon: Option<String>,
}

/// List amenities
pub async fn list_amenities(State(state): State<AppState>) -> AppResult<Json<Vec<amenity::Model>>> {
    Ok(Json(amenity::Entity::find().all(&state.db).await?))
}

/// Create an amenity
pub async fn create_amenity(
    State(state): State<AppState>,
    Json(payload): Json<AmenityRequest>,
) -> AppResult<Json<amenity::Model>> {
    let created = amenity::ActiveModel {
        name: Set(payload.name),
        icon: Set(payload.icon),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;
    Ok(Json(created))
}

/// Update an amenity
pub async fn update_amenity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AmenityRequest>,
) -> AppResult<Json<amenity::Model>> {
    let existing = amenity::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Amenity not found".to_string()))?;

    let mut active: amenity::ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.icon = Set(payload.icon);
    Ok(Json(active.update(&state.db).await?))
}

/// Delete an amenity
pub async fn delete_amenity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = amenity::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Amenity not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Amenity deleted" })))
}

// ============ Room Types ============

#[derive(Debug, Deserialize)]
pub struct CreateRoomTypeRequest {
    pub hotel_id: Option<i32>,
    pub name: String,
    pub price_weekday: Decimal,
    pub price_weekend: Decimal,
    pub capacity: Option<i32>,
    pub amenities: Option<Vec<i32>>,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoomTypeResponse {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub price_weekday: Decimal,
    pub price_weekend: Decimal,
    pub capacity: i32,
    pub amenities: Vec<amenity::Model>,
    pub image_url: Option<String>,
}

async fn room_type_response(
    state: &AppState,
    rt: room_type::Model,
) -> AppResult<RoomTypeResponse> {
    let amenities = rt
        .find_related(amenity::Entity)
        .all(&state.db)
        .await?;

    Ok(RoomTypeResponse {
        id: rt.id,
        hotel_id: rt.hotel_id,
        name: rt.name,
        price_weekday: rt.price_weekday,
        price_weekend: rt.price_weekend,
        capacity: rt.capacity,
        amenities,
        image_url: rt.image_url,
    })
}

/// List room types with their amenities
pub async fn list_room_types(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RoomTypeResponse>>> {
    let with_amenities = room_type::Entity::find()
        .find_with_related(amenity::Entity)
        .all(&state.db)
        .await?;

    let responses = with_amenities
        .into_iter()
        .map(|(rt, amenities)| RoomTypeResponse {
            id: rt.id,
            hotel_id: rt.hotel_id,
            name: rt.name,
            price_weekday: rt.price_weekday,
            price_weekend: rt.price_weekend,
            capacity: rt.capacity,
            amenities,
            image_url: rt.image_url,
        })
        .collect();

    Ok(Json(responses))
}

/// Create a room type, scoped to the caller's hotel
pub async fn create_room_type(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateRoomTypeRequest>,
) -> AppResult<Json<RoomTypeResponse>> {
    let hotel_id = resolve_hotel(&state.db, &claims, payload.hotel_id).await?;

    let created = room_type::ActiveModel {
        hotel_id: Set(hotel_id),
        name: Set(payload.name),
        price_weekday: Set(payload.price_weekday),
        price_weekend: Set(payload.price_weekend),
        capacity: Set(payload.capacity.unwrap_or(2)),
        image_url: Set(payload.image_url),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    if let Some(amenity_ids) = payload.amenities {
        set_amenities(&state, created.id, amenity_ids).await?;
    }

    let response = room_type_response(&state, created).await?;
    Ok(Json(response))
}

/// Get one room type
pub async fn get_room_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<RoomTypeResponse>> {
    let rt = room_type::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Room type not found".to_string()))?;

    let response = room_type_response(&state, rt).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoomTypeRequest {
    pub name: Option<String>,
    pub price_weekday: Option<Decimal>,
    pub price_weekend: Option<Decimal>,
    pub capacity: Option<i32>,
    pub amenities: Option<Vec<i32>>,
    pub image_url: Option<String>,
}

/// Update a room type; replaces the amenity set when one is provided
pub async fn update_room_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomTypeRequest>,
) -> AppResult<Json<RoomTypeResponse>> {
    let existing = room_type::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Room type not found".to_string()))?;

    let mut active: room_type::ActiveModel = existing.into();
    if let Some(v) = payload.name {
        active.name = Set(v);
    }
    if let Some(v) = payload.price_weekday {
        active.price_weekday = Set(v);
    }
    if let Some(v) = payload.price_weekend {
        active.price_weekend = Set(v);
    }
    if let Some(v) = payload.capacity {
        active.capacity = Set(v);
    }
    if let Some(v) = payload.image_url {
        active.image_url = Set(Some(v));
    }

    let updated = active.update(&state.db).await?;

    if let Some(amenity_ids) = payload.amenities {
        set_amenities(&state, updated.id, amenity_ids).await?;
    }

    let response = room_type_response(&state, updated).await?;
    Ok(Json(response))
}

/// Delete a room type
pub async fn delete_room_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = room_type::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Room type not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Room type deleted" })))
}

async fn set_amenities(state: &AppState, room_type_id: i32, amenity_ids: Vec<i32>) -> AppResult<()> {
    room_type_amenity::Entity::delete_many()
        .filter(room_type_amenity::Column::RoomTypeId.eq(room_type_id))
        .exec(&state.db)
        .await?;

    for amenity_id in amenity_ids {
        amenity::Entity::find_by_id(amenity_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Invalid amenity id {}", amenity_id)))?;

        room_type_amenity::ActiveModel {
            room_type_id: Set(room_type_id),
            amenity_id: Set(amenity_id),
        }
        .insert(&state.db)
        .await?;
    }

    Ok(())
}

// ============ Rooms ============

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub room_type_id: i32,
    pub room_number: String,
    pub floor: i32,
    pub status: Option<RoomStatus>,
}

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub id: i32,
    pub room_type_id: i32,
    pub room_type_name: String,
    pub room_type_image: Option<String>,
    pub room_number: String,
    pub floor: i32,
    pub status: RoomStatus,
}

/// List rooms with their room-type display fields
pub async fn list_rooms(State(state): State<AppState>) -> AppResult<Json<Vec<RoomResponse>>> {
    let rooms = room::Entity::find().all(&state.db).await?;
    let room_types = room_type::Entity::find().all(&state.db).await?;

    let responses = rooms
        .into_iter()
        .map(|r| {
            let rt = room_types.iter().find(|rt| rt.id == r.room_type_id);
            RoomResponse {
                id: r.id,
                room_type_id: r.room_type_id,
                room_type_name: rt.map(|rt| rt.name.clone()).unwrap_or_default(),
                room_type_image: rt.and_then(|rt| rt.image_url.clone()),
                room_number: r.room_number,
                floor: r.floor,
                status: r.status,
            }
        })
        .collect();

    Ok(Json(responses))
}

/// Create a room
pub async fn create_room(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoomRequest>,
) -> AppResult<Json<room::Model>> {
    room_type::Entity::find_by_id(payload.room_type_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid room type".to_string()))?;

    let created = room::ActiveModel {
        room_type_id: Set(payload.room_type_id),
        room_number: Set(payload.room_number),
        floor: Set(payload.floor),
        status: Set(payload.status.unwrap_or(RoomStatus::Clean)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created))
}

/// Get room details
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<room::Model>> {
    room::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoomRequest {
    pub room_number: Option<String>,
    pub floor: Option<i32>,
    pub status: Option<RoomStatus>,
}

/// Update a room
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomRequest>,
) -> AppResult<Json<room::Model>> {
    let existing = room::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    let mut active: room::ActiveModel = existing.into();
    if let Some(v) = payload.room_number {
        active.room_number = Set(v);
    }
    if let Some(v) = payload.floor {
        active.floor = Set(v);
    }
    if let Some(v) = payload.status {
        active.status = Set(v);
    }

    Ok(Json(active.update(&state.db).await?))
}

/// Delete a room
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = room::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Room not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Room deleted" })))
}
