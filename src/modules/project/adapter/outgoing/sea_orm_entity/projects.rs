use sea_orm::entity::prelude::*;

use crate::modules::tech_stack::adapter::outgoing::sea_orm_entity::tech_stack;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title_es: Option<String>,
    pub title_en: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description_es: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_en: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub content_es: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content_en: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub live_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub repo_url: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub image_url: String,

    pub is_featured: bool,
    pub display_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_techs::Entity")]
    ProjectTechs,
}

impl Related<super::project_techs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTechs.def()
    }
}

// Many-to-many: projects <-> tech_stack via project_techs
impl Related<tech_stack::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_techs::Relation::TechStack.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_techs::Relation::Projects.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
