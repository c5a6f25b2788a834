//! The `custom_types` table: an integer primary key and an
//! integer-backed enum column.

use enum_column::int_enum;
use sea_orm::entity::prelude::*;

int_enum! {
    pub enum Color as "Color" {
        Red = 1,
        Green = 2,
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "custom_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Integer")]
    pub val: Color,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
