use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join table for the RoomType <-> Amenity many-to-many.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "room_type_amenity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_type_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub amenity_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room_type::Entity",
        from = "Column::RoomTypeId",
        to = "super::room_type::Column::Id"
    )]
    RoomType,
    #[sea_orm(
        belongs_to = "super::amenity::Entity",
        from = "Column::AmenityId",
        to = "super::amenity::Column::Id"
    )]
    Amenity,
}

impl ActiveModelBehavior for ActiveModel {}
