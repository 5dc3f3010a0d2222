use sea_orm::entity::prelude::*;

use super::enums::FixtureStatus;

/// A scheduled or played match inside a competition season. Scores are
/// NULL until the fixture finishes.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fixture")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub competition_season_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub kickoff: DateTime,
    pub status: FixtureStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub created_at: DateTime,
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
    #[sea_orm(has_many = "super::fixture_event::Entity")]
    FixtureEvent,
}

impl Related<super::competition_season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompetitionSeason.def()
    }
}

impl Related<super::fixture_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FixtureEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
