pub mod auth;
pub mod billing;
pub mod bookings;
pub mod catalog;
pub mod content;
pub mod dashboard;
pub mod dining;
pub mod guests;
pub mod operations;
pub mod payhere;
pub mod staff;
