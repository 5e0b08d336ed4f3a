use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guest::Table)
                    .if_not_exists()
                    .col(pk_auto(Guest::Id))
                    .col(uuid_null(Guest::UserId).unique_key())
                    .col(string_len(Guest::Name, 255).not_null())
                    .col(string_len(Guest::Email, 255).not_null().unique_key())
                    .col(string_len(Guest::Phone, 50).not_null())
                    .col(string_len_null(Guest::Address, 500))
                    .col(json_binary(Guest::Preferences).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_user")
                            .from(Guest::Table, Guest::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guest {
    Table,
    Id,
    UserId,
    Name,
    Email,
    Phone,
    Address,
    Preferences,
}
