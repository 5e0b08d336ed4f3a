pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users;
mod m20250301_000002_create_hotels;
mod m20250301_000003_create_catalog;
mod m20250301_000004_create_guests;
mod m20250301_000005_create_bookings;
mod m20250301_000006_create_billing;
mod m20250301_000007_create_operations;
mod m20250301_000008_create_payroll;
mod m20250301_000009_create_dining;
mod m20250301_000010_create_content;
mod m20250301_000011_create_password_resets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_hotels::Migration),
            Box::new(m20250301_000003_create_catalog::Migration),
            Box::new(m20250301_000004_create_guests::Migration),
            Box::new(m20250301_000005_create_bookings::Migration),
            Box::new(m20250301_000006_create_billing::Migration),
            Box::new(m20250301_000007_create_operations::Migration),
            Box::new(m20250301_000008_create_payroll::Migration),
            Box::new(m20250301_000009_create_dining::Migration),
            Box::new(m20250301_000010_create_content::Migration),
            Box::new(m20250301_000011_create_password_resets::Migration),
        ]
    }
}
