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
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(pk_auto(Hotel::Id))
                    .col(string_len(Hotel::Name, 255).not_null())
                    .col(string_len(Hotel::Location, 255).not_null())
                    .col(uuid(Hotel::AdminUserId).not_null())
                    .col(string_len_null(Hotel::LogoUrl, 500))
                    .col(time(Hotel::CheckInTime).not_null())
                    .col(time(Hotel::CheckOutTime).not_null())
                    .col(string_len(Hotel::DefaultCurrency, 10).not_null())
                    .col(decimal_len(Hotel::TaxRate, 5, 2).not_null())
                    .col(boolean(Hotel::MaintenanceMode).not_null().default(false))
                    .col(string_len_null(Hotel::ContactPhone, 50))
                    .col(string_len_null(Hotel::ContactEmail, 255))
                    .col(string_len_null(Hotel::FacebookUrl, 500))
                    .col(string_len_null(Hotel::InstagramUrl, 500))
                    .col(text_null(Hotel::CancellationPolicy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_admin_user")
                            .from(Hotel::Table, Hotel::AdminUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StaffProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(StaffProfile::Id))
                    .col(uuid(StaffProfile::UserId).not_null().unique_key())
                    .col(integer(StaffProfile::HotelId).not_null())
                    .col(string_len_null(StaffProfile::Phone, 50))
                    .col(string_len_null(StaffProfile::JobTitle, 100))
                    .col(string_len_null(StaffProfile::Department, 100))
                    .col(string_len(StaffProfile::Status, 20).not_null())
                    .col(decimal_len(StaffProfile::Salary, 10, 2).not_null())
                    .col(string_len(StaffProfile::PayFrequency, 20).not_null())
                    .col(date_null(StaffProfile::LastPaymentDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_profile_user")
                            .from(StaffProfile::Table, StaffProfile::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_profile_hotel")
                            .from(StaffProfile::Table, StaffProfile::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffProfile::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Hotel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hotel {
    Table,
    Id,
    Name,
    Location,
    AdminUserId,
    LogoUrl,
    CheckInTime,
    CheckOutTime,
    DefaultCurrency,
    TaxRate,
    MaintenanceMode,
    ContactPhone,
    ContactEmail,
    FacebookUrl,
    InstagramUrl,
    CancellationPolicy,
}

#[derive(DeriveIden)]
pub enum StaffProfile {
    Table,
    Id,
    UserId,
    HotelId,
    Phone,
    JobTitle,
    Department,
    Status,
    Salary,
    PayFrequency,
    LastPaymentDate,
}
