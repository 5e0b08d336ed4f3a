use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub server_host: String,
    pub server_port: u16,
    pub payhere: PayhereConfig,
}

/// Merchant credentials and redirect URLs for the PayHere gateway.
#[derive(Clone)]
pub struct PayhereConfig {
    pub merchant_id: String,
    pub merchant_secret: String,
    pub currency: String,
    pub return_url: String,
    pub cancel_url: String,
    pub notify_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set"),
            jwt_secret: env::var("JWT_SECRET")
                .expect("JWT_SECRET must be set"),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .expect("JWT_EXPIRATION_HOURS must be a number"),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            payhere: PayhereConfig {
                merchant_id: env::var("PAYHERE_MERCHANT_ID")
                    .expect("PAYHERE_MERCHANT_ID must be set"),
                merchant_secret: env::var("PAYHERE_MERCHANT_SECRET")
                    .expect("PAYHERE_MERCHANT_SECRET must be set"),
                currency: env::var("PAYHERE_CURRENCY")
                    .unwrap_or_else(|_| "LKR".to_string()),
                return_url: env::var("PAYHERE_RETURN_URL")
                    .unwrap_or_else(|_| "http://localhost:3000/api/payhere/success".to_string()),
                cancel_url: env::var("PAYHERE_CANCEL_URL")
                    .unwrap_or_else(|_| "http://localhost:3000/api/payhere/cancel".to_string()),
                notify_url: env::var("PAYHERE_NOTIFY_URL")
                    .unwrap_or_else(|_| "http://localhost:3000/api/payhere/notify".to_string()),
            },
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
