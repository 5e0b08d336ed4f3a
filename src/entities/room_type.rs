use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "room_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub price_weekday: Decimal,
    pub price_weekend: Decimal,
    pub capacity: i32,
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::HotelId",
        to = "super::hotel::Column::Id"
    )]
    Hotel,
    #[sea_orm(has_many = "super::room::Entity")]
    Rooms,
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rooms.def()
    }
}

impl Related<super::amenity::Entity> for Entity {
    fn to() -> RelationDef {
        super::room_type_amenity::Relation::Amenity.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::room_type_amenity::Relation::RoomType.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
