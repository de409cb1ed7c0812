use sea_orm::entity::prelude::*;

use crate::modules::tech_stack::adapter::outgoing::sea_orm_entity::tech_stack;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "project_techs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub tech_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    Projects,

    #[sea_orm(
        belongs_to = "tech_stack::Entity",
        from = "Column::TechId",
        to = "tech_stack::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    TechStack,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<tech_stack::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TechStack.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
