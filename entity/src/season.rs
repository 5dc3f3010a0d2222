use sea_orm::entity::prelude::*;

/// A half-open interval `[start_date, end_date)` with a display label such
/// as "2024/25".
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "season")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub label: String,
    pub start_date: Date,
    pub end_date: Date,
    pub is_current: bool,
    pub created_at: DateTime,
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
