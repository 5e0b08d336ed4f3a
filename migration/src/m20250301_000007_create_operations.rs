use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_users::User;
use super::m20250301_000002_create_hotels::Hotel;
use super::m20250301_000003_create_catalog::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HousekeepingTask::Table)
                    .if_not_exists()
                    .col(pk_auto(HousekeepingTask::Id))
                    .col(integer(HousekeepingTask::RoomId).not_null())
                    .col(uuid_null(HousekeepingTask::AssignedTo))
                    .col(string_len(HousekeepingTask::Status, 20).not_null())
                    .col(text_null(HousekeepingTask::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_housekeeping_task_room")
                            .from(HousekeepingTask::Table, HousekeepingTask::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_housekeeping_task_user")
                            .from(HousekeepingTask::Table, HousekeepingTask::AssignedTo)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InventoryItem::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryItem::Id))
                    .col(integer(InventoryItem::HotelId).not_null())
                    .col(string_len(InventoryItem::Name, 255).not_null())
                    .col(integer(InventoryItem::StockLevel).not_null())
                    .col(integer(InventoryItem::LowStockThreshold).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_item_hotel")
                            .from(InventoryItem::Table, InventoryItem::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryItem::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(HousekeepingTask::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HousekeepingTask {
    Table,
    Id,
    RoomId,
    AssignedTo,
    Status,
    Notes,
}

#[derive(DeriveIden)]
pub enum InventoryItem {
    Table,
    Id,
    HotelId,
    Name,
    StockLevel,
    LowStockThreshold,
}
