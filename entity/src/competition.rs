use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "competition")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub country: String,
    pub logo_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::competition_season::Entity")]
    CompetitionSeason,
}

impl Related<super::competition_season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompetitionSeason.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
