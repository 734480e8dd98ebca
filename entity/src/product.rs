use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub sale_price: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_photo::Entity")]
    ProductPhoto,
    #[sea_orm(has_many = "super::ordered_product::Entity")]
    OrderedProduct,
}

impl Related<super::product_photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductPhoto.def()
    }
}

impl Related<super::ordered_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderedProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
