use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum PayFrequency {
    #[sea_orm(string_value = "Monthly")]
    Monthly,
    #[sea_orm(string_value = "Bi-Weekly")]
    BiWeekly,
    #[sea_orm(string_value = "Weekly")]
    Weekly,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "staff_profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub hotel_id: i32,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub status: String,
    pub salary: Decimal,
    pub pay_frequency: PayFrequency,
    pub last_payment_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::HotelId",
        to = "super::hotel::Column::Id"
    )]
    Hotel,
    #[sea_orm(has_many = "super::payroll_entry::Entity")]
    PayrollEntries,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::payroll_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PayrollEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
