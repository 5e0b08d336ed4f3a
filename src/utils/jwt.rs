use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::user::{self, UserRole};
use crate::error::{AppError, AppResult};

/// Bearer-token claims carried on every authenticated request.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id.
    pub sub: Uuid,
    pub email: String,
    pub role: UserRole,
    pub exp: i64,
    pub iat: i64,
}

/// Mint a token for an authenticated user account.
pub fn create_token(user: &user::Model, secret: &str, expiration_hours: i64) -> AppResult<String> {
    let now = Utc::now();

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role.clone(),
        exp: (now + Duration::hours(expiration_hours)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
}

pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn sample_user(role: UserRole) -> user::Model {
        user::Model {
            id: Uuid::new_v4(),
            email: "frontdesk@example.com".to_string(),
            password_hash: String::new(),
            first_name: "Front".to_string(),
            last_name: "Desk".to_string(),
            role,
            created_at: DateTime::from_timestamp(0, 0).unwrap().fixed_offset(),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let user = sample_user(UserRole::Staff);
        let token = create_token(&user, "test-secret", 1).unwrap();
        let claims = verify_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, UserRole::Staff);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let user = sample_user(UserRole::Guest);
        let token = create_token(&user, "test-secret", 1).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }
}
