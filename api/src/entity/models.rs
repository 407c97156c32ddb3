use sea_orm::entity::prelude::*;

/// `models` table. The primary key is externally assigned; `brand_id` is a
/// required foreign key into `brands`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "models")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub doors_count: i32,
    pub brand_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brands::Entity",
        from = "Column::BrandId",
        to = "super::brands::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Brands,
}

impl Related<super::brands::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brands.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
