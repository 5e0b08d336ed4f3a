use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub admin_user_id: Uuid,
    pub logo_url: Option<String>,
    pub check_in_time: Time,
    pub check_out_time: Time,
    pub default_currency: String,
    pub tax_rate: Decimal,
    pub maintenance_mode: bool,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub cancellation_policy: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AdminUserId",
        to = "super::user::Column::Id"
    )]
    AdminUser,
    #[sea_orm(has_many = "super::room_type::Entity")]
    RoomTypes,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::room_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomTypes.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
