use sea_orm::entity::prelude::*;

/// Recipe owned by a group. `slug` is unique within `group_id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_ratings::Entity")]
    UserRatings,
    #[sea_orm(has_many = "super::recipes_tags::Entity")]
    RecipesTags,
}

impl Related<super::user_ratings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRatings.def()
    }
}

impl Related<super::recipes_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipesTags.def()
    }
}

impl Related<super::tags::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipes_tags::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipes_tags::Relation::Recipe.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
