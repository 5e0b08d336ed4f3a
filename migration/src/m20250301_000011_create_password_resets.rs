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
                    .table(PasswordResetCode::Table)
                    .if_not_exists()
                    // One live code per user
                    .col(uuid(PasswordResetCode::UserId).primary_key())
                    .col(string_len(PasswordResetCode::Code, 10).not_null())
                    .col(
                        timestamp_with_time_zone(PasswordResetCode::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_password_reset_code_user")
                            .from(PasswordResetCode::Table, PasswordResetCode::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PasswordResetCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PasswordResetCode {
    Table,
    UserId,
    Code,
    CreatedAt,
}
