use sea_orm::entity::prelude::*;

/// Derived league-table row, unique per (competition_season, team).
/// Recomputed by the standings aggregator via upsert; never edited by
/// user action.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "standing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub competition_season_id: i32,
    pub team_id: i32,
    pub position: i32,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::competition_season::Entity",
        from = "Column::CompetitionSeasonId",
        to = "super::competition_season::Column::Id"
    )]
    CompetitionSeason,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,
}

impl Related<super::competition_season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompetitionSeason.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
