use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub short_name: String,
    pub country: String,
    pub founded: Option<i32>,
    pub logo_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_team_history::Entity")]
    PlayerTeamHistory,
    #[sea_orm(has_many = "super::team_venue_history::Entity")]
    TeamVenueHistory,
    #[sea_orm(has_many = "super::standing::Entity")]
    Standing,
}

impl Related<super::player_team_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerTeamHistory.def()
    }
}

impl Related<super::team_venue_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamVenueHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
