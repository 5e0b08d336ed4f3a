use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::entities::{hotel, staff_profile};
use crate::entities::user::UserRole;
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;

/// Resolve the hotel a staff-scoped write applies to.
///
/// Staff members always operate on the hotel of their profile. Super admins
/// are not tied to a hotel and must name one explicitly. There is no
/// fallback to an arbitrary hotel; a caller without tenant context is an
/// error, not a default.
pub async fn resolve_hotel(
    db: &DatabaseConnection,
    claims: &Claims,
    explicit_hotel_id: Option<i32>,
) -> AppResult<i32> {
    match claims.role {
        UserRole::SuperAdmin => {
            let hotel_id = explicit_hotel_id.ok_or_else(|| {
                AppError::BadRequest("hotel_id is required for super admin requests".to_string())
            })?;
            hotel::Entity::find_by_id(hotel_id)
                .one(db)
                .await?
                .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;
            Ok(hotel_id)
        }
        UserRole::Admin | UserRole::Staff | UserRole::Housekeeper => {
            let profile = staff_profile::Entity::find()
                .filter(staff_profile::Column::UserId.eq(claims.sub))
                .one(db)
                .await?
                .ok_or_else(|| {
                    AppError::Forbidden(
                        "User is not linked to a hotel staff profile".to_string(),
                    )
                })?;
            Ok(profile.hotel_id)
        }
        UserRole::Guest => Err(AppError::Forbidden(
            "Guests cannot manage hotel-scoped resources".to_string(),
        )),
    }
}
