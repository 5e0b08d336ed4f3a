use std::collections::HashSet;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IsolationLevel, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::entities::booking::{self, BookingStatus};
use crate::entities::invoice::{self, InvoiceStatus};
use crate::entities::room::{self, RoomStatus};
use crate::entities::{guest, room_type};
use crate::error::{AppError, AppResult};
use crate::utils::lifecycle::booking_transition;
use crate::utils::stay::{intervals_overlap, stay_total, validate_stay};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub guest_id: i32,
    pub room_type_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub special_requests: Option<String>,
    /// Bookings start life PENDING; operators may create directly CONFIRMED.
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: i32,
    pub hotel_id: i32,
    pub guest_id: i32,
    pub guest_name: String,
    pub room_id: Option<i32>,
    pub room_number: Option<String>,
    pub room_type_id: i32,
    pub room_type_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    pub total_price: Decimal,
    pub special_requests: Option<String>,
}

fn booking_response(
    b: booking::Model,
    guest_name: String,
    room_number: Option<String>,
    room_type_name: String,
) -> BookingResponse {
    BookingResponse {
        id: b.id,
        hotel_id: b.hotel_id,
        guest_id: b.guest_id,
        guest_name,
        room_id: b.room_id,
        room_number,
        room_type_id: b.room_type_id,
        room_type_name,
        check_in: b.check_in,
        check_out: b.check_out,
        status: b.status,
        total_price: b.total_price,
        special_requests: b.special_requests,
    }
}

/// Create a booking: pick a free room of the requested type and invoice it.
///
/// The availability check, the booking insert and the invoice insert run in
/// one serializable transaction so two requests racing for the last free
/// room cannot both win; the loser's commit aborts and surfaces as 409.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<Json<BookingResponse>> {
    validate_stay(payload.check_in, payload.check_out)?;

    let status = payload.status.unwrap_or(BookingStatus::Pending);
    if !matches!(status, BookingStatus::Pending | BookingStatus::Confirmed) {
        return Err(AppError::BadRequest(
            "New bookings must be PENDING or CONFIRMED".to_string(),
        ));
    }

    let room_type = room_type::Entity::find_by_id(payload.room_type_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid room type selected".to_string()))?;

    let guest = guest::Entity::find_by_id(payload.guest_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;

    let total_price = stay_total(
        room_type.price_weekday,
        room_type.price_weekend,
        payload.check_in,
        payload.check_out,
    );

    let txn = state
        .db
        .begin_with_config(Some(IsolationLevel::Serializable), None)
        .await?;

    // Rooms of this type, excluding those out of order; first by id wins.
    let rooms = room::Entity::find()
        .filter(room::Column::RoomTypeId.eq(room_type.id))
        .filter(room::Column::Status.ne(RoomStatus::Maintenance))
        .order_by_asc(room::Column::Id)
        .all(&txn)
        .await?;

    let room_ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();

    // Live bookings on these rooms; only those whose half-open stay
    // interval collides with the requested dates block a room.
    let occupied: HashSet<i32> = booking::Entity::find()
        .filter(booking::Column::RoomId.is_in(room_ids))
        .filter(
            booking::Column::Status
                .is_in([BookingStatus::Confirmed, BookingStatus::CheckedIn]),
        )
        .all(&txn)
        .await?
        .into_iter()
        .filter(|b| {
            intervals_overlap(b.check_in, b.check_out, payload.check_in, payload.check_out)
        })
        .filter_map(|b| b.room_id)
        .collect();

    let free_room = rooms
        .iter()
        .find(|r| !occupied.contains(&r.id))
        .ok_or_else(|| {
            AppError::Conflict("No rooms are available for these dates".to_string())
        })?;

    let created = booking::ActiveModel {
        hotel_id: Set(room_type.hotel_id),
        guest_id: Set(guest.id),
        room_id: Set(Some(free_room.id)),
        room_type_id: Set(room_type.id),
        check_in: Set(payload.check_in),
        check_out: Set(payload.check_out),
        status: Set(status),
        total_price: Set(total_price),
        special_requests: Set(payload.special_requests.clone()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    // Invoice for the full stay, due on arrival. The unique constraint on
    // booking_id keeps this idempotent.
    invoice::ActiveModel {
        booking_id: Set(created.id),
        amount: Set(created.total_price),
        status: Set(InvoiceStatus::Unpaid),
        issued_date: Set(Utc::now().date_naive()),
        due_date: Set(created.check_in),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await.map_err(|e| {
        tracing::warn!("Booking transaction aborted: {}", e);
        AppError::Conflict("Booking conflicted with a concurrent reservation, please retry".to_string())
    })?;

    let room_number = Some(free_room.room_number.clone());
    Ok(Json(booking_response(
        created,
        guest.name,
        room_number,
        room_type.name,
    )))
}

#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    pub guest: Option<i32>,
}

/// List bookings, most recent stay first; optionally filtered by guest.
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingListQuery>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    let mut find = booking::Entity::find().order_by_desc(booking::Column::CheckIn);
    if let Some(guest_id) = query.guest {
        find = find.filter(booking::Column::GuestId.eq(guest_id));
    }
    let bookings = find.all(&state.db).await?;

    let guests = guest::Entity::find().all(&state.db).await?;
    let rooms = room::Entity::find().all(&state.db).await?;
    let room_types = room_type::Entity::find().all(&state.db).await?;

    let responses = bookings
        .into_iter()
        .map(|b| {
            let guest_name = guests
                .iter()
                .find(|g| g.id == b.guest_id)
                .map(|g| g.name.clone())
                .unwrap_or_default();
            let room_number = b
                .room_id
                .and_then(|rid| rooms.iter().find(|r| r.id == rid))
                .map(|r| r.room_number.clone());
            let room_type_name = room_types
                .iter()
                .find(|rt| rt.id == b.room_type_id)
                .map(|rt| rt.name.clone())
                .unwrap_or_default();
            booking_response(b, guest_name, room_number, room_type_name)
        })
        .collect();

    Ok(Json(responses))
}

/// Get booking details
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookingResponse>> {
    let b = booking::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    let guest_name = guest::Entity::find_by_id(b.guest_id)
        .one(&state.db)
        .await?
        .map(|g| g.name)
        .unwrap_or_default();
    let room_number = match b.room_id {
        Some(rid) => room::Entity::find_by_id(rid)
            .one(&state.db)
            .await?
            .map(|r| r.room_number),
        None => None,
    };
    let room_type_name = room_type::Entity::find_by_id(b.room_type_id)
        .one(&state.db)
        .await?
        .map(|rt| rt.name)
        .unwrap_or_default();

    Ok(Json(booking_response(b, guest_name, room_number, room_type_name)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookingRequest {
    pub status: Option<BookingStatus>,
    pub room_id: Option<i32>,
    pub special_requests: Option<String>,
}

/// Update a booking. Status changes go through the lifecycle transition
/// check; a reassigned room must belong to the booked room type.
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingRequest>,
) -> AppResult<Json<booking::Model>> {
    let existing = booking::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    let mut active: booking::ActiveModel = existing.clone().into();

    if let Some(new_status) = payload.status {
        if new_status != existing.status {
            active.status = Set(booking_transition(existing.status, new_status)?);
        }
    }

    if let Some(room_id) = payload.room_id {
        let new_room = room::Entity::find_by_id(room_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;
        if new_room.room_type_id != existing.room_type_id {
            return Err(AppError::BadRequest(
                "Room does not belong to the booked room type".to_string(),
            ));
        }
        active.room_id = Set(Some(room_id));
    }

    if let Some(requests) = payload.special_requests {
        active.special_requests = Set(Some(requests));
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}

/// Delete a booking
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = booking::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Booking not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Booking deleted" })))
}
