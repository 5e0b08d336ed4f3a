use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_hotels::StaffProfile;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PayrollEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(PayrollEntry::Id))
                    .col(integer(PayrollEntry::StaffId).not_null())
                    .col(decimal_len(PayrollEntry::SalaryAmount, 10, 2).not_null())
                    .col(decimal_len(PayrollEntry::BonusAmount, 10, 2).not_null())
                    .col(date(PayrollEntry::PaymentDate).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payroll_entry_staff")
                            .from(PayrollEntry::Table, PayrollEntry::StaffId)
                            .to(StaffProfile::Table, StaffProfile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PayrollEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PayrollEntry {
    Table,
    Id,
    StaffId,
    SalaryAmount,
    BonusAmount,
    PaymentDate,
}
