use sea_orm::entity::prelude::*;

/// One score prediction per (account, fixture); resubmitting before kickoff
/// replaces the previous guess.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "prediction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account_id: i32,
    pub fixture_id: i32,
    pub home_score: i32,
    pub away_score: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
    #[sea_orm(
        belongs_to = "super::fixture::Entity",
        from = "Column::FixtureId",
        to = "super::fixture::Column::Id"
    )]
    Fixture,
}

impl Related<super::fixture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fixture.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
