use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::entities::invoice::{self, InvoiceStatus};
use crate::entities::payment::{self, PaymentMethod, PaymentStatus};
use crate::entities::booking;
use crate::error::{AppError, AppResult};
use crate::utils::lifecycle::invoice_transition;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub id: i32,
    pub booking_id: i32,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub issued_date: NaiveDate,
    pub due_date: NaiveDate,
    pub payments: Vec<payment::Model>,
}

#[derive(Debug, Deserialize)]
pub struct InvoiceListQuery {
    pub booking: Option<i32>,
}

/// List invoices with their payments embedded
pub async fn list_invoices(
    State(state): State<AppState>,
    Query(query): Query<InvoiceListQuery>,
) -> AppResult<Json<Vec<InvoiceResponse>>> {
    let mut find = invoice::Entity::find();
    if let Some(booking_id) = query.booking {
        find = find.filter(invoice::Column::BookingId.eq(booking_id));
    }

    let invoices = find.find_with_related(payment::Entity).all(&state.db).await?;

    let responses = invoices
        .into_iter()
        .map(|(inv, payments)| InvoiceResponse {
            id: inv.id,
            booking_id: inv.booking_id,
            amount: inv.amount,
            status: inv.status,
            issued_date: inv.issued_date,
            due_date: inv.due_date,
            payments,
        })
        .collect();

    Ok(Json(responses))
}

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub booking_id: i32,
    pub due_date: Option<NaiveDate>,
}

/// Create the invoice for a booking. The amount always comes from the
/// booking's total price, and a booking can only ever hold one invoice.
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(payload): Json<CreateInvoiceRequest>,
) -> AppResult<Json<invoice::Model>> {
    let booking = booking::Entity::find_by_id(payload.booking_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    let existing = invoice::Entity::find()
        .filter(invoice::Column::BookingId.eq(booking.id))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(
            "Booking already has an invoice".to_string(),
        ));
    }

    let created = invoice::ActiveModel {
        booking_id: Set(booking.id),
        amount: Set(booking.total_price),
        status: Set(InvoiceStatus::Unpaid),
        issued_date: Set(Utc::now().date_naive()),
        due_date: Set(payload.due_date.unwrap_or(booking.check_in)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created))
}

/// Get one invoice with its payments
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<InvoiceResponse>> {
    let inv = invoice::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice not found".to_string()))?;

    let payments = payment::Entity::find()
        .filter(payment::Column::InvoiceId.eq(inv.id))
        .all(&state.db)
        .await?;

    Ok(Json(InvoiceResponse {
        id: inv.id,
        booking_id: inv.booking_id,
        amount: inv.amount,
        status: inv.status,
        issued_date: inv.issued_date,
        due_date: inv.due_date,
        payments,
    }))
}

#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub status: Option<InvoiceStatus>,
    pub due_date: Option<NaiveDate>,
}

/// Update an invoice. Status changes go through the lifecycle check; the
/// amount is fixed at creation and cannot be edited.
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInvoiceRequest>,
) -> AppResult<Json<invoice::Model>> {
    let existing = invoice::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice not found".to_string()))?;

    let mut active: invoice::ActiveModel = existing.clone().into();

    if let Some(new_status) = payload.status {
        if new_status != existing.status {
            active.status = Set(invoice_transition(existing.status, new_status)?);
        }
    }
    if let Some(due) = payload.due_date {
        active.due_date = Set(due);
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}

/// Delete an invoice
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = invoice::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Invoice not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Invoice deleted" })))
}

// ============ Payments ============

#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub invoice_id: i32,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub transaction_id: Option<String>,
    pub status: Option<PaymentStatus>,
}

/// List payments
pub async fn list_payments(State(state): State<AppState>) -> AppResult<Json<Vec<payment::Model>>> {
    let payments = payment::Entity::find().all(&state.db).await?;
    Ok(Json(payments))
}

/// Record a settlement event against an invoice
pub async fn create_payment(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentRequest>,
) -> AppResult<Json<payment::Model>> {
    invoice::Entity::find_by_id(payload.invoice_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice not found".to_string()))?;

    if payload.amount <= Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Payment amount must be positive".to_string(),
        ));
    }

    let created = payment::ActiveModel {
        invoice_id: Set(payload.invoice_id),
        amount: Set(payload.amount),
        method: Set(payload.method),
        transaction_id: Set(payload.transaction_id),
        status: Set(payload.status.unwrap_or(PaymentStatus::Completed)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(created))
}

/// Get payment details
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<payment::Model>> {
    payment::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct UpdatePaymentRequest {
    pub status: Option<PaymentStatus>,
    pub transaction_id: Option<String>,
}

/// Update a payment's status or transaction reference
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePaymentRequest>,
) -> AppResult<Json<payment::Model>> {
    let existing = payment::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

    let mut active: payment::ActiveModel = existing.into();
    if let Some(status) = payload.status {
        active.status = Set(status);
    }
    if let Some(txid) = payload.transaction_id {
        active.transaction_id = Set(Some(txid));
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}

/// Delete a payment
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = payment::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Payment not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Payment deleted" })))
}
