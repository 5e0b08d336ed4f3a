use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_hotels::Hotel;
use super::m20250301_000003_create_catalog::{Room, RoomType};
use super::m20250301_000004_create_guests::Guest;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::HotelId).not_null())
                    .col(integer(Booking::GuestId).not_null())
                    // Nulled rather than cascaded when a room is removed,
                    // so booking history survives
                    .col(integer_null(Booking::RoomId))
                    .col(integer(Booking::RoomTypeId).not_null())
                    .col(date(Booking::CheckIn).not_null())
                    .col(date(Booking::CheckOut).not_null())
                    .col(string_len(Booking::Status, 20).not_null())
                    .col(decimal_len(Booking::TotalPrice, 10, 2).not_null())
                    .col(text_null(Booking::SpecialRequests))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_hotel")
                            .from(Booking::Table, Booking::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_guest")
                            .from(Booking::Table, Booking::GuestId)
                            .to(Guest::Table, Guest::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_room")
                            .from(Booking::Table, Booking::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_room_type")
                            .from(Booking::Table, Booking::RoomTypeId)
                            .to(RoomType::Table, RoomType::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // The allocator's overlap scan filters on room and stay dates
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_room_dates")
                    .table(Booking::Table)
                    .col(Booking::RoomId)
                    .col(Booking::CheckIn)
                    .col(Booking::CheckOut)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    HotelId,
    GuestId,
    RoomId,
    RoomTypeId,
    CheckIn,
    CheckOut,
    Status,
    TotalPrice,
    SpecialRequests,
}
