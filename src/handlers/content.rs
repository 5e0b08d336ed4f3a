use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::entities::blog;
use crate::entities::contact_message::{self, MessageStatus};
use crate::entities::discount_coupon;
use crate::entities::event_booking::{self, EventStatus, EventType};
use crate::entities::promo_banner::{self, BannerStyle};
use crate::entities::user::UserRole;
use crate::entities::{guest, hotel};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;
use crate::utils::tenant::resolve_hotel;
use crate::AppState;

// ============ Blogs ============

#[derive(Debug, Deserialize)]
pub struct BlogListQuery {
    pub published: Option<bool>,
}

/// List blog posts. Unauthenticated readers only ever see published ones;
/// the public route passes `published=true`.
pub async fn list_blogs(
    State(state): State<AppState>,
    Query(query): Query<BlogListQuery>,
) -> AppResult<Json<Vec<blog::Model>>> {
    let mut finder = blog::Entity::find().order_by_desc(blog::Column::CreatedAt);
    if let Some(published) = query.published {
        finder = finder.filter(blog::Column::IsPublished.eq(published));
    }
    Ok(Json(finder.all(&state.db).await?))
}

/// Public read of a single published post
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<blog::Model>> {
    let post = blog::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;
    Ok(Json(post))
}

#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub hotel_id: Option<i32>,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub is_published: Option<bool>,
}

/// Create a blog post under the caller's hotel
pub async fn create_blog(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateBlogRequest>,
) -> AppResult<Json<blog::Model>> {
    let hotel_id = resolve_hotel(&state.db, &claims, payload.hotel_id).await?;

    let created = blog::ActiveModel {
        hotel_id: Set(hotel_id),
        title: Set(payload.title),
        content: Set(payload.content),
        image_url: Set(payload.image_url),
        author: Set(payload.author.unwrap_or_else(|| "Admin".to_string())),
        is_published: Set(payload.is_published.unwrap_or(false)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub is_published: Option<bool>,
}

/// Update a blog post
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBlogRequest>,
) -> AppResult<Json<blog::Model>> {
    let existing = blog::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

    let mut active: blog::ActiveModel = existing.into();
    if let Some(v) = payload.title {
        active.title = Set(v);
    }
    if let Some(v) = payload.content {
        active.content = Set(v);
    }
    if let Some(v) = payload.image_url {
        active.image_url = Set(Some(v));
    }
    if let Some(v) = payload.author {
        active.author = Set(v);
    }
    if let Some(v) = payload.is_published {
        active.is_published = Set(v);
    }

    Ok(Json(active.update(&state.db).await?))
}

/// Delete a blog post
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = blog::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Blog post not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Blog post deleted" })))
}

// ============ Event bookings ============

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub hotel_id: i32,
    pub guest_id: i32,
    pub event_type: EventType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub attendees: i32,
    pub budget_notes: Option<String>,
    pub special_requests: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    pub guest: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    #[serde(flatten)]
    pub event: event_booking::Model,
    pub guest_name: String,
}

/// List event enquiries, optionally filtered by guest
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> AppResult<Json<Vec<EventResponse>>> {
    let mut finder = event_booking::Entity::find().order_by_desc(event_booking::Column::CreatedAt);
    if let Some(guest_id) = query.guest {
        finder = finder.filter(event_booking::Column::GuestId.eq(guest_id));
    }
    let events = finder.all(&state.db).await?;
    let guests = guest::Entity::find().all(&state.db).await?;

    let responses = events
        .into_iter()
        .map(|e| {
            let guest_name = guests
                .iter()
                .find(|g| g.id == e.guest_id)
                .map(|g| g.name.clone())
                .unwrap_or_default();
            EventResponse { event: e, guest_name }
        })
        .collect();

    Ok(Json(responses))
}

/// Submit an event enquiry. Guests may only enquire on their own behalf.
pub async fn create_event(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateEventRequest>,
) -> AppResult<Json<event_booking::Model>> {
    if payload.start_date > payload.end_date {
        return Err(AppError::BadRequest(
            "Event end date must not be before its start date".to_string(),
        ));
    }
    if payload.attendees <= 0 {
        return Err(AppError::BadRequest(
            "Attendee count must be positive".to_string(),
        ));
    }

    let enquiring_guest = guest::Entity::find_by_id(payload.guest_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;

    if claims.role == UserRole::Guest && enquiring_guest.user_id != Some(claims.sub) {
        return Err(AppError::Forbidden(
            "Guests can only submit enquiries for themselves".to_string(),
        ));
    }

    hotel::Entity::find_by_id(payload.hotel_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;

    let created = event_booking::ActiveModel {
        hotel_id: Set(payload.hotel_id),
        guest_id: Set(payload.guest_id),
        event_type: Set(payload.event_type),
        start_date: Set(payload.start_date),
        end_date: Set(payload.end_date),
        attendees: Set(payload.attendees),
        budget_notes: Set(payload.budget_notes),
        special_requests: Set(payload.special_requests),
        status: Set(EventStatus::Pending),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
pub struct UpdateEventRequest {
    pub status: Option<EventStatus>,
    pub attendees: Option<i32>,
    pub budget_notes: Option<String>,
    pub special_requests: Option<String>,
}

/// Update an event enquiry, typically confirming or cancelling it
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEventRequest>,
) -> AppResult<Json<event_booking::Model>> {
    let existing = event_booking::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Event booking not found".to_string()))?;

    let mut active: event_booking::ActiveModel = existing.into();
    if let Some(v) = payload.status {
        active.status = Set(v);
    }
    if let Some(v) = payload.attendees {
        if v <= 0 {
            return Err(AppError::BadRequest(
                "Attendee count must be positive".to_string(),
            ));
        }
        active.attendees = Set(v);
    }
    if let Some(v) = payload.budget_notes {
        active.budget_notes = Set(Some(v));
    }
    if let Some(v) = payload.special_requests {
        active.special_requests = Set(Some(v));
    }

    Ok(Json(active.update(&state.db).await?))
}

/// Delete an event enquiry
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = event_booking::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Event booking not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Event booking deleted" })))
}

// ============ Contact messages ============

#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Public contact form submission
pub async fn create_message(
    State(state): State<AppState>,
    Json(payload): Json<CreateMessageRequest>,
) -> AppResult<Json<contact_message::Model>> {
    if payload.message.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Message body cannot be empty".to_string(),
        ));
    }

    let created = contact_message::ActiveModel {
        name: Set(payload.name),
        email: Set(payload.email.to_lowercase()),
        subject: Set(payload.subject),
        message: Set(payload.message),
        status: Set(MessageStatus::Pending),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created))
}

/// Staff view of the contact inbox
pub async fn list_messages(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<contact_message::Model>>> {
    let messages = contact_message::Entity::find()
        .order_by_desc(contact_message::Column::CreatedAt)
        .all(&state.db)
        .await?;
    Ok(Json(messages))
}

#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub status: MessageStatus,
}

/// Mark a contact message as contacted or resolved
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMessageRequest>,
) -> AppResult<Json<contact_message::Model>> {
    let existing = contact_message::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact message not found".to_string()))?;

    let mut active: contact_message::ActiveModel = existing.into();
    active.status = Set(payload.status);

    Ok(Json(active.update(&state.db).await?))
}

/// Delete a contact message
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = contact_message::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Contact message not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Contact message deleted" })))
}

// ============ Promo banners ============

/// Public list of active banners for the storefront
pub async fn list_active_banners(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<promo_banner::Model>>> {
    let banners = promo_banner::Entity::find()
        .filter(promo_banner::Column::IsActive.eq(true))
        .order_by_desc(promo_banner::Column::CreatedAt)
        .all(&state.db)
        .await?;
    Ok(Json(banners))
}

/// Admin list of all banners, active or not
pub async fn list_banners(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<promo_banner::Model>>> {
    let banners = promo_banner::Entity::find()
        .order_by_desc(promo_banner::Column::CreatedAt)
        .all(&state.db)
        .await?;
    Ok(Json(banners))
}

#[derive(Debug, Deserialize)]
pub struct CreateBannerRequest {
    pub hotel_id: Option<i32>,
    pub title: String,
    pub message: String,
    pub link_text: Option<String>,
    pub link_url: Option<String>,
    pub style: Option<BannerStyle>,
    pub is_active: Option<bool>,
}

/// Create a promo banner
pub async fn create_banner(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateBannerRequest>,
) -> AppResult<Json<promo_banner::Model>> {
    let hotel_id = resolve_hotel(&state.db, &claims, payload.hotel_id).await?;

    let created = promo_banner::ActiveModel {
        hotel_id: Set(hotel_id),
        title: Set(payload.title),
        message: Set(payload.message),
        link_text: Set(payload.link_text),
        link_url: Set(payload.link_url),
        style: Set(payload.style.unwrap_or(BannerStyle::Info)),
        is_active: Set(payload.is_active.unwrap_or(true)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
pub struct UpdateBannerRequest {
    pub title: Option<String>,
    pub message: Option<String>,
    pub link_text: Option<String>,
    pub link_url: Option<String>,
    pub style: Option<BannerStyle>,
    pub is_active: Option<bool>,
}

/// Update a promo banner
pub async fn update_banner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBannerRequest>,
) -> AppResult<Json<promo_banner::Model>> {
    let existing = promo_banner::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Promo banner not found".to_string()))?;

    let mut active: promo_banner::ActiveModel = existing.into();
    if let Some(v) = payload.title {
        active.title = Set(v);
    }
    if let Some(v) = payload.message {
        active.message = Set(v);
    }
    if let Some(v) = payload.link_text {
        active.link_text = Set(Some(v));
    }
    if let Some(v) = payload.link_url {
        active.link_url = Set(Some(v));
    }
    if let Some(v) = payload.style {
        active.style = Set(v);
    }
    if let Some(v) = payload.is_active {
        active.is_active = Set(v);
    }

    Ok(Json(active.update(&state.db).await?))
}

/// Delete a promo banner
pub async fn delete_banner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = promo_banner::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Promo banner not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Promo banner deleted" })))
}

// ============ Discount coupons ============

#[derive(Debug, Deserialize)]
pub struct CreateCouponRequest {
    pub hotel_id: Option<i32>,
    pub code: String,
    pub discount_percent: Decimal,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub is_active: Option<bool>,
}

/// List discount coupons
pub async fn list_coupons(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<discount_coupon::Model>>> {
    Ok(Json(discount_coupon::Entity::find().all(&state.db).await?))
}

/// Create a discount coupon. Codes are stored uppercase and must be unique.
pub async fn create_coupon(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateCouponRequest>,
) -> AppResult<Json<discount_coupon::Model>> {
    let hotel_id = resolve_hotel(&state.db, &claims, payload.hotel_id).await?;

    if payload.discount_percent <= Decimal::ZERO || payload.discount_percent > Decimal::from(100) {
        return Err(AppError::BadRequest(
            "Discount percent must be between 0 and 100".to_string(),
        ));
    }
    if payload.valid_from > payload.valid_to {
        return Err(AppError::BadRequest(
            "Coupon validity window is inverted".to_string(),
        ));
    }

    let code = payload.code.trim().to_uppercase();
    let duplicate = discount_coupon::Entity::find()
        .filter(discount_coupon::Column::Code.eq(code.clone()))
        .one(&state.db)
        .await?;
    if duplicate.is_some() {
        return Err(AppError::Conflict("Coupon code already exists".to_string()));
    }

    let created = discount_coupon::ActiveModel {
        hotel_id: Set(hotel_id),
        code: Set(code),
        discount_percent: Set(payload.discount_percent),
        valid_from: Set(payload.valid_from),
        valid_to: Set(payload.valid_to),
        is_active: Set(payload.is_active.unwrap_or(true)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
pub struct UpdateCouponRequest {
    pub discount_percent: Option<Decimal>,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

/// Update a discount coupon. The code itself is immutable once issued.
pub async fn update_coupon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCouponRequest>,
) -> AppResult<Json<discount_coupon::Model>> {
    let existing = discount_coupon::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Coupon not found".to_string()))?;

    let mut active: discount_coupon::ActiveModel = existing.into();
    if let Some(v) = payload.discount_percent {
        if v <= Decimal::ZERO || v > Decimal::from(100) {
            return Err(AppError::BadRequest(
                "Discount percent must be between 0 and 100".to_string(),
            ));
        }
        active.discount_percent = Set(v);
    }
    if let Some(v) = payload.valid_from {
        active.valid_from = Set(v);
    }
    if let Some(v) = payload.valid_to {
        active.valid_to = Set(v);
    }
    if let Some(v) = payload.is_active {
        active.is_active = Set(v);
    }

    Ok(Json(active.update(&state.db).await?))
}

/// Delete a discount coupon
pub async fn delete_coupon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = discount_coupon::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Coupon not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Coupon deleted" })))
}
