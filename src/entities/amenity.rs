use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "amenity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::room_type::Entity> for Entity {
    fn to() -> RelationDef {
        super::room_type_amenity::Relation::RoomType.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::room_type_amenity::Relation::Amenity.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
