use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "venue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub capacity: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team_venue_history::Entity")]
    TeamVenueHistory,
}

impl Related<super::team_venue_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamVenueHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
