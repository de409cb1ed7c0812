use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tech_stack")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// One of FRONTEND, BACKEND, DATABASE, DEVOPS, TOOLS (checked by the table)
    pub category: String,
    pub icon_slug: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::project::adapter::outgoing::sea_orm_entity::project_techs::Entity"
    )]
    ProjectTechs,
}

impl Related<crate::modules::project::adapter::outgoing::sea_orm_entity::project_techs::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::ProjectTechs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
