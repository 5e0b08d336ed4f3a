use axum::{extract::State, Json};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde::Serialize;

use crate::entities::{booking, guest, invoice, room};
use crate::error::AppResult;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_bookings: u64,
    pub total_customers: u64,
    pub total_rooms: u64,
    pub revenue: Decimal,
}

/// Headline numbers for the admin dashboard. Revenue is the sum of every
/// invoice issued, paid or not, which matches how the front desk reports it.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let total_bookings = booking::Entity::find().count(&state.db).await?;
    let total_customers = guest::Entity::find().count(&state.db).await?;
    let total_rooms = room::Entity::find().count(&state.db).await?;

    let invoices = invoice::Entity::find().all(&state.db).await?;
    let revenue = invoices.iter().map(|i| i.amount).sum();

    Ok(Json(DashboardStats {
        total_bookings,
        total_customers,
        total_rooms,
        revenue,
    }))
}
