pub mod amenity;
pub mod blog;
pub mod booking;
pub mod contact_message;
pub mod discount_coupon;
pub mod event_booking;
pub mod food_item;
pub mod food_order;
pub mod guest;
pub mod hotel;
pub mod housekeeping_task;
pub mod inventory_item;
pub mod invoice;
pub mod password_reset_code;
pub mod payment;
pub mod payroll_entry;
pub mod promo_banner;
pub mod room;
pub mod room_type;
pub mod room_type_amenity;
pub mod staff_profile;
pub mod user;
