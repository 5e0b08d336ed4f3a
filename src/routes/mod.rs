use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{
    auth, billing, bookings, catalog, content, dashboard, dining, guests, operations, payhere,
    staff,
};
use crate::middleware::auth::{auth_middleware, require_admin, require_staff};
use crate::middleware::rate_limit::create_public_governor;
use crate::middleware::role_rate_limit::{create_role_governor, RateLimitedRole};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Role-specific governor layers
    let staff_governor = create_role_governor(RateLimitedRole::Staff);
    let guest_governor = create_role_governor(RateLimitedRole::Guest);
    // IP-based governor for unauthenticated traffic
    let public_governor = create_public_governor();

    // Public routes (per-IP rate limiting, no auth)
    let public_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/request-reset", post(auth::request_reset))
        .route("/confirm-reset", post(auth::confirm_reset))
        // Payment gateway callbacks; the notify handler does its own
        // signature verification
        .route("/payhere/notify", post(payhere::notify))
        .route("/payhere/success", get(payhere::success))
        .route("/payhere/cancel", get(payhere::cancel))
        // Storefront content
        .route("/room-types", get(catalog::list_room_types))
        .route("/room-types/{id}", get(catalog::get_room_type))
        .route("/amenities", get(catalog::list_amenities))
        .route("/blogs", get(content::list_blogs))
        .route("/blogs/{id}", get(content::get_blog))
        .route("/promo-banners", get(content::list_active_banners))
        .route("/contact-messages", post(content::create_message))
        .layer(public_governor);

    // Guest routes (requires auth, per-user rate limiting)
    let guest_routes = Router::new()
        .route("/change-password", post(auth::change_password))
        .route("/bookings", post(bookings::create_booking))
        .route("/bookings", get(bookings::list_bookings))
        .route("/bookings/{id}", get(bookings::get_booking))
        .route("/guests", get(guests::list_guests))
        .route("/guests", post(guests::create_guest))
        .route("/guests/{id}", get(guests::get_guest))
        .route("/guests/{id}", put(guests::update_guest))
        .route("/food-items", get(dining::list_food_items))
        .route("/food-orders", get(dining::list_orders))
        .route("/food-orders", post(dining::create_order))
        .route("/event-bookings", get(content::list_events))
        .route("/event-bookings", post(content::create_event))
        .route("/payhere/init", post(payhere::init))
        .route("/payhere-hash", post(payhere::generate_hash))
        .layer(guest_governor)
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Staff routes (requires auth + any staff role)
    let staff_routes = Router::new()
        .route("/bookings/{id}", put(bookings::update_booking))
        .route("/rooms", get(catalog::list_rooms))
        .route("/rooms/{id}", get(catalog::get_room))
        .route("/housekeeping", get(operations::list_tasks))
        .route("/housekeeping", post(operations::create_task))
        .route("/housekeeping/{id}", put(operations::update_task))
        .route("/food-items", post(dining::create_food_item))
        .route("/food-items/{id}", put(dining::update_food_item))
        .route("/food-orders/{id}", put(dining::update_order))
        .route("/event-bookings/{id}", put(content::update_event))
        .route("/invoices", get(billing::list_invoices))
        .route("/invoices/{id}", get(billing::get_invoice))
        .route("/payments", get(billing::list_payments))
        .route("/payments", post(billing::create_payment))
        .route("/payments/{id}", get(billing::get_payment))
        .layer(staff_governor)
        .layer(middleware::from_fn(require_staff))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Admin routes (requires auth + admin role)
    // No per-user limiter here; the outer IP-based layer still applies
    let admin_routes = Router::new()
        // Property management
        .route("/hotels", get(catalog::list_hotels))
        .route("/hotels", post(catalog::create_hotel))
        .route("/hotels/{id}", get(catalog::get_hotel))
        .route("/hotels/{id}", put(catalog::update_hotel))
        .route("/hotels/{id}", delete(catalog::delete_hotel))
        .route("/amenities", post(catalog::create_amenity))
        .route("/amenities/{id}", put(catalog::update_amenity))
        .route("/amenities/{id}", delete(catalog::delete_amenity))
        .route("/room-types", post(catalog::create_room_type))
        .route("/room-types/{id}", put(catalog::update_room_type))
        .route("/room-types/{id}", delete(catalog::delete_room_type))
        .route("/rooms", post(catalog::create_room))
        .route("/rooms/{id}", put(catalog::update_room))
        .route("/rooms/{id}", delete(catalog::delete_room))
        // People
        .route("/users", get(staff::list_users))
        .route("/users", post(staff::create_user))
        .route("/users/{id}", get(staff::get_user))
        .route("/users/{id}", delete(staff::delete_user))
        .route("/staff", get(staff::list_staff))
        .route("/staff", post(staff::create_staff))
        .route("/staff/{id}", put(staff::update_staff))
        .route("/staff/{id}", delete(staff::delete_staff))
        .route("/payroll", get(staff::list_payroll))
        .route("/payroll", post(staff::create_payroll))
        .route("/payroll/{id}", delete(staff::delete_payroll))
        .route("/guests/{id}", delete(guests::delete_guest))
        // Bookings and billing
        .route("/bookings/{id}", delete(bookings::delete_booking))
        .route("/invoices", post(billing::create_invoice))
        .route("/invoices/{id}", put(billing::update_invoice))
        .route("/invoices/{id}", delete(billing::delete_invoice))
        .route("/payments/{id}", put(billing::update_payment))
        .route("/payments/{id}", delete(billing::delete_payment))
        // Operations
        .route("/housekeeping/{id}", delete(operations::delete_task))
        .route("/inventory", get(operations::list_inventory))
        .route("/inventory", post(operations::create_inventory))
        .route("/inventory/{id}", put(operations::update_inventory))
        .route("/inventory/{id}", delete(operations::delete_inventory))
        .route("/food-items/{id}", delete(dining::delete_food_item))
        .route("/food-orders/{id}", delete(dining::delete_order))
        // Marketing and content
        .route("/blogs", post(content::create_blog))
        .route("/blogs/{id}", put(content::update_blog))
        .route("/blogs/{id}", delete(content::delete_blog))
        .route("/promo-banners/all", get(content::list_banners))
        .route("/promo-banners", post(content::create_banner))
        .route("/promo-banners/{id}", put(content::update_banner))
        .route("/promo-banners/{id}", delete(content::delete_banner))
        .route("/coupons", get(content::list_coupons))
        .route("/coupons", post(content::create_coupon))
        .route("/coupons/{id}", put(content::update_coupon))
        .route("/coupons/{id}", delete(content::delete_coupon))
        .route("/contact-messages", get(content::list_messages))
        .route("/contact-messages/{id}", put(content::update_message))
        .route("/contact-messages/{id}", delete(content::delete_message))
        .route("/event-bookings/{id}", delete(content::delete_event))
        // Dashboard
        .route("/dashboard", get(dashboard::get_stats))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .nest("/api", public_routes)
        .nest("/api", guest_routes)
        .nest("/api/staff", staff_routes)
        .nest("/api/admin", admin_routes)
        .with_state(state)
}
