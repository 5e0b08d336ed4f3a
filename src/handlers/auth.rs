use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{extract::State, Extension, Json};
use rand::Rng;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::user::{self, UserRole};
use crate::entities::{guest, password_reset_code};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::{create_token, Claims};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub role: UserRole,
    pub guest_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest: Option<GuestInfo>,
}

#[derive(Debug, Serialize)]
pub struct GuestInfo {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Login with email and password. The payload carries the derived role and,
/// for registered guests, the linked guest profile so clients can skip a
/// follow-up lookup.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = user::Entity::find()
        .filter(user::Column::Email.eq(&payload.email))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|e| AppError::Internal(format!("Failed to parse password hash: {}", e)))?;

    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let token = create_token(&user, &state.config.jwt_secret, state.config.jwt_expiration_hours)?;

    let guest = guest::Entity::find()
        .filter(guest::Column::UserId.eq(user.id))
        .one(&state.db)
        .await?;

    Ok(Json(AuthResponse {
        token,
        user: UserInfo {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            guest_id: guest.as_ref().map(|g| g.id),
            guest: guest.map(|g| GuestInfo {
                id: g.id,
                name: g.name,
                email: g.email,
                phone: g.phone,
            }),
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Change the authenticated user's password after verifying the old one.
pub async fn change_password(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ChangePasswordRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let user = user::Entity::find_by_id(claims.sub)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|e| AppError::Internal(format!("Failed to parse password hash: {}", e)))?;

    Argon2::default()
        .verify_password(payload.old_password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::BadRequest("Wrong password".to_string()))?;

    let mut active: user::ActiveModel = user.into();
    active.password_hash = Set(hash_password(&payload.new_password)?);
    active.update(&state.db).await?;

    Ok(Json(serde_json::json!({ "message": "Password updated successfully" })))
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub email: String,
}

/// Issue a 4-digit one-time reset code. Mail delivery is out of scope, so
/// the code comes back in the response body for the demo flow.
pub async fn request_reset(
    State(state): State<AppState>,
    Json(payload): Json<ResetRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let user = user::Entity::find()
        .filter(user::Column::Email.eq(&payload.email))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Email not found".to_string()))?;

    let code = format!("{}", rand::thread_rng().gen_range(1000..=9999));

    // One active code per user: replace any previous one.
    password_reset_code::Entity::delete_by_id(user.id)
        .exec(&state.db)
        .await?;
    password_reset_code::ActiveModel {
        user_id: Set(user.id),
        code: Set(code.clone()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(serde_json::json!({
        "message": "Reset code generated.",
        "demo_code": code,
    })))
}

#[derive(Debug, Deserialize)]
pub struct ResetConfirmRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// Consume a reset code and set the new password.
pub async fn confirm_reset(
    State(state): State<AppState>,
    Json(payload): Json<ResetConfirmRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let user = user::Entity::find()
        .filter(user::Column::Email.eq(&payload.email))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Email not found".to_string()))?;

    let record = password_reset_code::Entity::find_by_id(user.id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("No reset request found".to_string()))?;

    if record.code != payload.code {
        return Err(AppError::BadRequest("Invalid code".to_string()));
    }

    let mut active: user::ActiveModel = user.clone().into();
    active.password_hash = Set(hash_password(&payload.new_password)?);
    active.update(&state.db).await?;

    password_reset_code::Entity::delete_by_id(user.id)
        .exec(&state.db)
        .await?;

    Ok(Json(serde_json::json!({ "message": "Password has been reset successfully." })))
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}
