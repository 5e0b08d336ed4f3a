use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[sea_orm(string_value = "SUPER_ADMIN")]
    SuperAdmin,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "STAFF")]
    Staff,
    #[sea_orm(string_value = "HOUSEKEEPER")]
    Housekeeper,
    #[sea_orm(string_value = "GUEST")]
    Guest,
}

impl UserRole {
    /// Staff roles carry a StaffProfile and operate on a single hotel.
    pub fn is_staff(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Staff | UserRole::Housekeeper)
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::staff_profile::Entity")]
    StaffProfile,
    #[sea_orm(has_one = "super::guest::Entity")]
    Guest,
}

impl Related<super::staff_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StaffProfile.def()
    }
}

impl Related<super::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
