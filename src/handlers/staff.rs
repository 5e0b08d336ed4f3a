use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::staff_profile::{self, PayFrequency};
use crate::entities::user::{self, UserRole};
use crate::entities::payroll_entry;
use crate::error::{AppError, AppResult};
use crate::handlers::auth::hash_password;
use crate::utils::jwt::Claims;
use crate::utils::tenant::resolve_hotel;
use crate::AppState;

// ============ Users ============

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<UserRole>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for UserResponse {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            role: u.role,
            created_at: u.created_at.with_timezone(&Utc),
        }
    }
}

/// List user accounts (for staff assignment pickers)
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = user::Entity::find().all(&state.db).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a user account with a hashed password
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(&payload.email))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let created = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(payload.email),
        password_hash: Set(hash_password(&payload.password)?),
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        role: Set(payload.role.unwrap_or(UserRole::Guest)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created.into()))
}

/// Get a user account
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    user::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .map(|u| Json(UserResponse::from(u)))
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// Delete a user account
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = user::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "User deleted" })))
}

// ============ Staff Profiles ============

#[derive(Debug, Deserialize)]
pub struct CreateStaffRequest {
    pub user_id: Uuid,
    pub hotel_id: Option<i32>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub salary: Option<Decimal>,
    pub pay_frequency: Option<PayFrequency>,
}

#[derive(Debug, Serialize)]
pub struct StaffResponse {
    pub id: i32,
    pub user: UserResponse,
    pub hotel_id: i32,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub status: String,
    pub salary: Decimal,
    pub pay_frequency: PayFrequency,
    pub last_payment_date: Option<NaiveDate>,
}

fn staff_response(profile: staff_profile::Model, user: user::Model) -> StaffResponse {
    StaffResponse {
        id: profile.id,
        user: user.into(),
        hotel_id: profile.hotel_id,
        phone: profile.phone,
        job_title: profile.job_title,
        department: profile.department,
        status: profile.status,
        salary: profile.salary,
        pay_frequency: profile.pay_frequency,
        last_payment_date: profile.last_payment_date,
    }
}

/// List staff profiles with their user accounts embedded
pub async fn list_staff(State(state): State<AppState>) -> AppResult<Json<Vec<StaffResponse>>> {
    let profiles = staff_profile::Entity::find()
        .find_also_related(user::Entity)
        .all(&state.db)
        .await?;

    let responses = profiles
        .into_iter()
        .filter_map(|(profile, user)| user.map(|u| staff_response(profile, u)))
        .collect();

    Ok(Json(responses))
}

/// Create a staff profile under the caller's hotel
pub async fn create_staff(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateStaffRequest>,
) -> AppResult<Json<StaffResponse>> {
    let hotel_id = resolve_hotel(&state.db, &claims, payload.hotel_id).await?;

    let user = user::Entity::find_by_id(payload.user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if !user.role.is_staff() {
        return Err(AppError::BadRequest(
            "User does not have a staff role".to_string(),
        ));
    }

    let existing = staff_profile::Entity::find()
        .filter(staff_profile::Column::UserId.eq(user.id))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(
            "User already has a staff profile".to_string(),
        ));
    }

    let created = staff_profile::ActiveModel {
        user_id: Set(user.id),
        hotel_id: Set(hotel_id),
        phone: Set(payload.phone),
        job_title: Set(payload.job_title),
        department: Set(payload.department),
        status: Set("Active".to_string()),
        salary: Set(payload.salary.unwrap_or(Decimal::ZERO)),
        pay_frequency: Set(payload.pay_frequency.unwrap_or(PayFrequency::Monthly)),
        last_payment_date: Set(None),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(staff_response(created, user)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStaffRequest {
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
    pub salary: Option<Decimal>,
    pub pay_frequency: Option<PayFrequency>,
}

/// Update a staff profile
pub async fn update_staff(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStaffRequest>,
) -> AppResult<Json<staff_profile::Model>> {
    let existing = staff_profile::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Staff profile not found".to_string()))?;

    let mut active: staff_profile::ActiveModel = existing.into();
    if let Some(v) = payload.phone {
        active.phone = Set(Some(v));
    }
    if let Some(v) = payload.job_title {
        active.job_title = Set(Some(v));
    }
    if let Some(v) = payload.department {
        active.department = Set(Some(v));
    }
    if let Some(v) = payload.status {
        active.status = Set(v);
    }
    if let Some(v) = payload.salary {
        active.salary = Set(v);
    }
    if let Some(v) = payload.pay_frequency {
        active.pay_frequency = Set(v);
    }

    Ok(Json(active.update(&state.db).await?))
}

/// Delete a staff profile
pub async fn delete_staff(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = staff_profile::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Staff profile not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Staff profile deleted" })))
}

// ============ Payroll ============

#[derive(Debug, Deserialize)]
pub struct PayrollListQuery {
    pub staff_id: Option<i32>,
}

/// List payroll entries, newest first, optionally for one staff member
pub async fn list_payroll(
    State(state): State<AppState>,
    Query(query): Query<PayrollListQuery>,
) -> AppResult<Json<Vec<payroll_entry::Model>>> {
    let mut find = payroll_entry::Entity::find().order_by_desc(payroll_entry::Column::PaymentDate);
    if let Some(staff_id) = query.staff_id {
        find = find.filter(payroll_entry::Column::StaffId.eq(staff_id));
    }
    Ok(Json(find.all(&state.db).await?))
}

#[derive(Debug, Deserialize)]
pub struct CreatePayrollRequest {
    pub staff_id: i32,
    pub salary_amount: Decimal,
    pub bonus_amount: Option<Decimal>,
    pub payment_date: NaiveDate,
}

/// Record a salary payment and roll the staff profile's last payment date
pub async fn create_payroll(
    State(state): State<AppState>,
    Json(payload): Json<CreatePayrollRequest>,
) -> AppResult<Json<payroll_entry::Model>> {
    let profile = staff_profile::Entity::find_by_id(payload.staff_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Staff profile not found".to_string()))?;

    let created = payroll_entry::ActiveModel {
        staff_id: Set(profile.id),
        salary_amount: Set(payload.salary_amount),
        bonus_amount: Set(payload.bonus_amount.unwrap_or(Decimal::ZERO)),
        payment_date: Set(payload.payment_date),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    let mut active: staff_profile::ActiveModel = profile.into();
    active.last_payment_date = Set(Some(created.payment_date));
    active.update(&state.db).await?;

    Ok(Json(created))
}

/// Delete a payroll entry
pub async fn delete_payroll(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = payroll_entry::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Payroll entry not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Payroll entry deleted" })))
}
