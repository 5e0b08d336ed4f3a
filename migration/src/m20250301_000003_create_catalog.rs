use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_hotels::Hotel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Amenity::Table)
                    .if_not_exists()
                    .col(pk_auto(Amenity::Id))
                    .col(string_len(Amenity::Name, 100).not_null())
                    .col(string_len_null(Amenity::Icon, 100))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RoomType::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomType::Id))
                    .col(integer(RoomType::HotelId).not_null())
                    .col(string_len(RoomType::Name, 100).not_null())
                    .col(decimal_len(RoomType::PriceWeekday, 10, 2).not_null())
                    .col(decimal_len(RoomType::PriceWeekend, 10, 2).not_null())
                    .col(integer(RoomType::Capacity).not_null())
                    .col(string_len_null(RoomType::ImageUrl, 500))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_type_hotel")
                            .from(RoomType::Table, RoomType::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Join table with a composite primary key
        manager
            .create_table(
                Table::create()
                    .table(RoomTypeAmenity::Table)
                    .if_not_exists()
                    .col(integer(RoomTypeAmenity::RoomTypeId).not_null())
                    .col(integer(RoomTypeAmenity::AmenityId).not_null())
                    .primary_key(
                        Index::create()
                            .col(RoomTypeAmenity::RoomTypeId)
                            .col(RoomTypeAmenity::AmenityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_type_amenity_room_type")
                            .from(RoomTypeAmenity::Table, RoomTypeAmenity::RoomTypeId)
                            .to(RoomType::Table, RoomType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_type_amenity_amenity")
                            .from(RoomTypeAmenity::Table, RoomTypeAmenity::AmenityId)
                            .to(Amenity::Table, Amenity::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(integer(Room::RoomTypeId).not_null())
                    .col(string_len(Room::RoomNumber, 20).not_null())
                    .col(integer(Room::Floor).not_null())
                    .col(string_len(Room::Status, 20).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_room_type")
                            .from(Room::Table, Room::RoomTypeId)
                            .to(RoomType::Table, RoomType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(RoomTypeAmenity::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(RoomType::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Amenity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Amenity {
    Table,
    Id,
    Name,
    Icon,
}

#[derive(DeriveIden)]
pub enum RoomType {
    Table,
    Id,
    HotelId,
    Name,
    PriceWeekday,
    PriceWeekend,
    Capacity,
    ImageUrl,
}

#[derive(DeriveIden)]
pub enum RoomTypeAmenity {
    Table,
    RoomTypeId,
    AmenityId,
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    RoomTypeId,
    RoomNumber,
    Floor,
    Status,
}
