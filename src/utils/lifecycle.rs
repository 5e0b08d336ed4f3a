use crate::entities::booking::BookingStatus;
use crate::entities::invoice::InvoiceStatus;
use crate::error::{AppError, AppResult};

/// Validate a booking status change. All call sites (handlers and the
/// gateway callback) go through here so the allowed edges live in one place.
pub fn booking_transition(from: BookingStatus, to: BookingStatus) -> AppResult<BookingStatus> {
    use BookingStatus::*;

    let allowed = matches!(
        (from, to),
        (Pending, Confirmed)
            | (Pending, Cancelled)
            | (Confirmed, CheckedIn)
            | (Confirmed, Cancelled)
            | (CheckedIn, CheckedOut)
    );

    if allowed {
        Ok(to)
    } else {
        Err(AppError::Conflict(format!(
            "Cannot move booking from {:?} to {:?}",
            from, to
        )))
    }
}

/// Validate an invoice status change. PAID is terminal; FAILED may recover
/// to PAID when the gateway retries a settlement.
pub fn invoice_transition(from: InvoiceStatus, to: InvoiceStatus) -> AppResult<InvoiceStatus> {
    use InvoiceStatus::*;

    let allowed = matches!(
        (from, to),
        (Unpaid, Partial)
            | (Unpaid, Paid)
            | (Unpaid, Failed)
            | (Partial, Paid)
            | (Partial, Failed)
            | (Failed, Paid)
            | (Failed, Unpaid)
    );

    if allowed {
        Ok(to)
    } else {
        Err(AppError::Conflict(format!(
            "Cannot move invoice from {:?} to {:?}",
            from, to
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::booking::BookingStatus::*;
    use crate::entities::invoice::InvoiceStatus;

    #[test]
    fn test_booking_happy_path() {
        assert!(booking_transition(Pending, Confirmed).is_ok());
        assert!(booking_transition(Confirmed, CheckedIn).is_ok());
        assert!(booking_transition(CheckedIn, CheckedOut).is_ok());
    }

    #[test]
    fn test_booking_cancellation_only_before_check_in() {
        assert!(booking_transition(Pending, Cancelled).is_ok());
        assert!(booking_transition(Confirmed, Cancelled).is_ok());
        assert!(booking_transition(CheckedIn, Cancelled).is_err());
        assert!(booking_transition(CheckedOut, Cancelled).is_err());
    }

    #[test]
    fn test_booking_no_backwards_moves() {
        assert!(booking_transition(Confirmed, Pending).is_err());
        assert!(booking_transition(CheckedOut, CheckedIn).is_err());
        assert!(booking_transition(Cancelled, Confirmed).is_err());
    }

    #[test]
    fn test_invoice_paid_is_terminal() {
        assert!(invoice_transition(InvoiceStatus::Unpaid, InvoiceStatus::Paid).is_ok());
        assert!(invoice_transition(InvoiceStatus::Paid, InvoiceStatus::Unpaid).is_err());
        assert!(invoice_transition(InvoiceStatus::Paid, InvoiceStatus::Failed).is_err());
    }

    #[test]
    fn test_invoice_failed_can_recover() {
        assert!(invoice_transition(InvoiceStatus::Unpaid, InvoiceStatus::Failed).is_ok());
        assert!(invoice_transition(InvoiceStatus::Failed, InvoiceStatus::Paid).is_ok());
    }
}
