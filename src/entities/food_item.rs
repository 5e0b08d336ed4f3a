use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    #[sea_orm(string_value = "starters")]
    Starters,
    #[sea_orm(string_value = "mains")]
    Mains,
    #[sea_orm(string_value = "drinks")]
    Drinks,
    #[sea_orm(string_value = "dessert")]
    Dessert,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub category: FoodCategory,
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_available: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::HotelId",
        to = "super::hotel::Column::Id"
    )]
    Hotel,
}

impl ActiveModelBehavior for ActiveModel {}
