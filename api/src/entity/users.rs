use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable, indexed)]
    pub real_name: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", unique, indexed)]
    pub username: String,
    #[sea_orm(column_type = "String(StringLen::N(255))", unique, indexed)]
    pub email: String,
    #[sea_orm(default_value = false)]
    pub is_active: bool,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    #[sea_orm(column_type = "String(StringLen::N(500))", nullable)]
    pub avatar_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::posts::Entity")]
    Posts,
}

impl Related<super::posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
