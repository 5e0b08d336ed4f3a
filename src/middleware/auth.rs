use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::entities::user::UserRole;
use crate::error::{AppError, AppResult};
use crate::utils::jwt::{verify_token, Claims};
use crate::AppState;

/// Extract and validate JWT token from Authorization header
pub async fn auth_middleware(
    State(state): State<AppState>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let claims = verify_token(auth.token(), &state.config.jwt_secret)?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

fn claims_from(request: &Request) -> AppResult<&Claims> {
    request
        .extensions()
        .get::<Claims>()
        .ok_or_else(|| AppError::Unauthorized("No authentication found".to_string()))
}

/// Require super admin or hotel admin role
pub async fn require_admin(request: Request, next: Next) -> AppResult<Response> {
    let claims = claims_from(&request)?;

    if !matches!(claims.role, UserRole::SuperAdmin | UserRole::Admin) {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    Ok(next.run(request).await)
}

/// Require any staff role (admin, front desk or housekeeping)
pub async fn require_staff(request: Request, next: Next) -> AppResult<Response> {
    let claims = claims_from(&request)?;

    if claims.role == UserRole::Guest {
        return Err(AppError::Forbidden("Staff access required".to_string()));
    }

    Ok(next.run(request).await)
}
