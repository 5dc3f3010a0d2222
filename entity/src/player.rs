use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub position: String,
    pub country: String,
    pub date_of_birth: Option<Date>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_team_history::Entity")]
    PlayerTeamHistory,
    #[sea_orm(has_many = "super::player_season_stat::Entity")]
    PlayerSeasonStat,
}

impl Related<super::player_team_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerTeamHistory.def()
    }
}

impl Related<super::player_season_stat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerSeasonStat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
