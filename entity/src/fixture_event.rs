use sea_orm::entity::prelude::*;

use super::enums::EventKind;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fixture_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fixture_id: i32,
    pub team_id: i32,
    pub player_id: i32,
    pub minute: i32,
    pub kind: EventKind,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fixture::Entity",
        from = "Column::FixtureId",
        to = "super::fixture::Column::Id"
    )]
    Fixture,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id"
    )]
    Player,
}

impl Related<super::fixture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fixture.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
