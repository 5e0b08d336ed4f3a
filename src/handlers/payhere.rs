use axum::{extract::State, Form, Json};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::entities::booking::{self, BookingStatus};
use crate::entities::invoice::{self, InvoiceStatus};
use crate::entities::payment::{self, PaymentMethod, PaymentStatus};
use crate::entities::guest;
use crate::error::{AppError, AppResult};
use crate::utils::lifecycle::{booking_transition, invoice_transition};
use crate::utils::payhere::{
    checkout_hash, format_amount, notify_signature, order_reference, parse_order_reference,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct InitRequest {
    pub booking_id: i32,
}

/// Everything the frontend needs to submit the PayHere checkout form.
#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub merchant_id: String,
    pub order_id: String,
    pub amount: String,
    pub currency: String,
    pub hash: String,
    pub return_url: String,
    pub cancel_url: String,
    pub notify_url: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Build the gateway handshake fields for a booking.
pub async fn init(
    State(state): State<AppState>,
    Json(payload): Json<InitRequest>,
) -> AppResult<Json<InitResponse>> {
    let booking = booking::Entity::find_by_id(payload.booking_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Invalid booking".to_string()))?;

    let guest = guest::Entity::find_by_id(booking.guest_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;

    let payhere = &state.config.payhere;
    let order_id = order_reference(booking.id);
    let amount = format_amount(booking.total_price);
    let hash = checkout_hash(
        &payhere.merchant_id,
        &order_id,
        &amount,
        &payhere.currency,
        &payhere.merchant_secret,
    );

    Ok(Json(InitResponse {
        merchant_id: payhere.merchant_id.clone(),
        order_id,
        amount,
        currency: payhere.currency.clone(),
        hash,
        return_url: payhere.return_url.clone(),
        cancel_url: payhere.cancel_url.clone(),
        notify_url: payhere.notify_url.clone(),
        first_name: guest.name,
        last_name: "Guest".to_string(),
        email: guest.email,
        phone: guest.phone,
    }))
}

#[derive(Debug, Deserialize)]
pub struct HashRequest {
    pub order_id: String,
    pub amount: String,
}

#[derive(Debug, Serialize)]
pub struct HashResponse {
    pub hash: String,
    pub merchant_id: String,
    pub currency: String,
}

/// Standalone checkout-hash generation for an arbitrary order id and amount.
pub async fn generate_hash(
    State(state): State<AppState>,
    Json(payload): Json<HashRequest>,
) -> AppResult<Json<HashResponse>> {
    let amount: f64 = payload
        .amount
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid amount".to_string()))?;
    let amount = format!("{:.2}", amount);

    let payhere = &state.config.payhere;
    let hash = checkout_hash(
        &payhere.merchant_id,
        &payload.order_id,
        &amount,
        &payhere.currency,
        &payhere.merchant_secret,
    );

    Ok(Json(HashResponse {
        hash,
        merchant_id: payhere.merchant_id.clone(),
        currency: payhere.currency.clone(),
    }))
}

/// Gateway callback payload. PayHere posts form-encoded fields and signs
/// them with `md5sig`; it cannot present a session token.
#[derive(Debug, Deserialize)]
pub struct NotifyPayload {
    pub merchant_id: String,
    pub order_id: String,
    pub payment_id: Option<String>,
    pub payhere_amount: String,
    pub payhere_currency: String,
    pub status_code: String,
    pub md5sig: String,
}

/// Apply a settlement notification from the gateway.
///
/// The `md5sig` signature is verified before anything else; an unsigned or
/// tampered callback changes no state. status_code "2" settles the invoice
/// and confirms the booking; any other code marks the invoice FAILED and
/// leaves the booking alone.
pub async fn notify(
    State(state): State<AppState>,
    Form(payload): Form<NotifyPayload>,
) -> AppResult<&'static str> {
    let payhere = &state.config.payhere;

    let expected = notify_signature(
        &payload.merchant_id,
        &payload.order_id,
        &payload.payhere_amount,
        &payload.payhere_currency,
        &payload.status_code,
        &payhere.merchant_secret,
    );
    if payload.merchant_id != payhere.merchant_id || payload.md5sig != expected {
        tracing::warn!(order_id = %payload.order_id, "Rejected payment notification with bad signature");
        return Err(AppError::Unauthorized(
            "Invalid notification signature".to_string(),
        ));
    }

    let booking_id = parse_order_reference(&payload.order_id)
        .ok_or_else(|| AppError::BadRequest("Malformed order_id".to_string()))?;

    let booking = booking::Entity::find_by_id(booking_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    let inv = invoice::Entity::find()
        .filter(invoice::Column::BookingId.eq(booking.id))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice not found for booking".to_string()))?;

    if payload.status_code == "2" {
        // Gateways retry notifications; a settled invoice is already done.
        if inv.status == InvoiceStatus::Paid {
            return Ok("OK");
        }

        let amount: rust_decimal::Decimal = payload
            .payhere_amount
            .parse()
            .map_err(|_| AppError::BadRequest("Invalid payhere_amount".to_string()))?;

        let txn = state.db.begin().await?;

        let mut inv_active: invoice::ActiveModel = inv.clone().into();
        inv_active.status = Set(invoice_transition(inv.status, InvoiceStatus::Paid)?);
        inv_active.update(&txn).await?;

        payment::ActiveModel {
            invoice_id: Set(inv.id),
            amount: Set(amount),
            method: Set(PaymentMethod::Payhere),
            transaction_id: Set(payload.payment_id.clone()),
            status: Set(PaymentStatus::Completed),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        // Operator-created bookings may already be CONFIRMED.
        if booking.status == BookingStatus::Pending {
            let mut booking_active: booking::ActiveModel = booking.clone().into();
            booking_active.status =
                Set(booking_transition(booking.status, BookingStatus::Confirmed)?);
            booking_active.update(&txn).await?;
        }

        txn.commit().await?;

        tracing::info!(booking_id, "Payment settled via gateway callback");
        Ok("OK")
    } else {
        if inv.status != InvoiceStatus::Failed {
            let mut inv_active: invoice::ActiveModel = inv.clone().into();
            inv_active.status = Set(invoice_transition(inv.status, InvoiceStatus::Failed)?);
            inv_active.update(&state.db).await?;
        }

        tracing::warn!(
            booking_id,
            status_code = %payload.status_code,
            "Gateway reported unsuccessful payment"
        );
        Err(AppError::BadRequest("FAILED".to_string()))
    }
}

/// Landing endpoint after a successful checkout redirect.
pub async fn success() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Payment successful!" }))
}

/// Landing endpoint after a cancelled checkout redirect.
pub async fn cancel() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Payment cancelled!" }))
}
