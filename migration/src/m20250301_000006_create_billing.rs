use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000005_create_bookings::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoice::Id))
                    // One invoice per booking
                    .col(integer(Invoice::BookingId).not_null().unique_key())
                    .col(decimal_len(Invoice::Amount, 10, 2).not_null())
                    .col(string_len(Invoice::Status, 20).not_null())
                    .col(date(Invoice::IssuedDate).not_null())
                    .col(date(Invoice::DueDate).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_booking")
                            .from(Invoice::Table, Invoice::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::InvoiceId).not_null())
                    .col(decimal_len(Payment::Amount, 10, 2).not_null())
                    .col(
                        timestamp_with_time_zone(Payment::PaymentDate)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(string_len(Payment::Method, 20).not_null())
                    .col(string_len_null(Payment::TransactionId, 255))
                    .col(string_len(Payment::Status, 20).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_invoice")
                            .from(Payment::Table, Payment::InvoiceId)
                            .to(Invoice::Table, Invoice::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Invoice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invoice {
    Table,
    Id,
    BookingId,
    Amount,
    Status,
    IssuedDate,
    DueDate,
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    InvoiceId,
    Amount,
    PaymentDate,
    Method,
    TransactionId,
    Status,
}
