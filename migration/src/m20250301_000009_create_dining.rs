use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_hotels::Hotel;
use super::m20250301_000004_create_guests::Guest;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodItem::Table)
                    .if_not_exists()
                    .col(pk_auto(FoodItem::Id))
                    .col(integer(FoodItem::HotelId).not_null())
                    .col(string_len(FoodItem::Name, 255).not_null())
                    .col(string_len(FoodItem::Category, 20).not_null())
                    .col(decimal_len(FoodItem::Price, 10, 2).not_null())
                    .col(text_null(FoodItem::Description))
                    .col(string_len_null(FoodItem::ImageUrl, 500))
                    .col(boolean(FoodItem::IsAvailable).not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_item_hotel")
                            .from(FoodItem::Table, FoodItem::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FoodOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(FoodOrder::Id))
                    .col(integer(FoodOrder::HotelId).not_null())
                    .col(integer(FoodOrder::GuestId).not_null())
                    .col(string_len(FoodOrder::RoomNumber, 20).not_null())
                    .col(json_binary(FoodOrder::Items).not_null())
                    .col(decimal_len(FoodOrder::TotalPrice, 10, 2).not_null())
                    .col(string_len(FoodOrder::Status, 20).not_null())
                    .col(
                        timestamp_with_time_zone(FoodOrder::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_order_hotel")
                            .from(FoodOrder::Table, FoodOrder::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_order_guest")
                            .from(FoodOrder::Table, FoodOrder::GuestId)
                            .to(Guest::Table, Guest::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FoodOrder::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FoodItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FoodItem {
    Table,
    Id,
    HotelId,
    Name,
    Category,
    Price,
    Description,
    ImageUrl,
    IsAvailable,
}

#[derive(DeriveIden)]
pub enum FoodOrder {
    Table,
    Id,
    HotelId,
    GuestId,
    RoomNumber,
    Items,
    TotalPrice,
    Status,
    CreatedAt,
}
