use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

/// One aggregated stat line, keyed by (player, team) within the
/// competition season supplied to the upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSeasonStatUpsert {
    pub player_id: i32,
    pub team_id: i32,
    pub appearances: i32,
    pub goals: i32,
    pub assists: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
}

pub struct PlayerSeasonStatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerSeasonStatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn upsert_many(
        &self,
        competition_season_id: i32,
        rows: Vec<PlayerSeasonStatUpsert>,
    ) -> Result<Vec<entity::player_season_stat::Model>, DbErr> {
        if rows.is_empty() {
            return Ok(vec![]);
        }

        let stats = rows
            .into_iter()
            .map(|row| entity::player_season_stat::ActiveModel {
                player_id: ActiveValue::Set(row.player_id),
                competition_season_id: ActiveValue::Set(competition_season_id),
                team_id: ActiveValue::Set(row.team_id),
                appearances: ActiveValue::Set(row.appearances),
                goals: ActiveValue::Set(row.goals),
                assists: ActiveValue::Set(row.assists),
                yellow_cards: ActiveValue::Set(row.yellow_cards),
                red_cards: ActiveValue::Set(row.red_cards),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            });

        entity::prelude::PlayerSeasonStat::insert_many(stats)
            .on_conflict(
                OnConflict::columns([
                    entity::player_season_stat::Column::PlayerId,
                    entity::player_season_stat::Column::CompetitionSeasonId,
                    entity::player_season_stat::Column::TeamId,
                ])
                .update_columns([
                    entity::player_season_stat::Column::Appearances,
                    entity::player_season_stat::Column::Goals,
                    entity::player_season_stat::Column::Assists,
                    entity::player_season_stat::Column::YellowCards,
                    entity::player_season_stat::Column::RedCards,
                    entity::player_season_stat::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Every stat line a player has, oldest edition first; the input to
    /// career totals.
    pub async fn list_for_player(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::player_season_stat::Model>, DbErr> {
        entity::prelude::PlayerSeasonStat::find()
            .filter(entity::player_season_stat::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::player_season_stat::Column::CompetitionSeasonId)
            .order_by_asc(entity::player_season_stat::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn list_for_player_in_season(
        &self,
        player_id: i32,
        competition_season_id: i32,
    ) -> Result<Vec<entity::player_season_stat::Model>, DbErr> {
        entity::prelude::PlayerSeasonStat::find()
            .filter(entity::player_season_stat::Column::PlayerId.eq(player_id))
            .filter(
                entity::player_season_stat::Column::CompetitionSeasonId.eq(competition_season_id),
            )
            .all(self.db)
            .await
    }

    /// Top scorers of one edition.
    pub async fn top_scorers(
        &self,
        competition_season_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::player_season_stat::Model>, DbErr> {
        entity::prelude::PlayerSeasonStat::find()
            .filter(
                entity::player_season_stat::Column::CompetitionSeasonId.eq(competition_season_id),
            )
            .order_by_desc(entity::player_season_stat::Column::Goals)
            .order_by_desc(entity::player_season_stat::Column::Assists)
            .order_by_asc(entity::player_season_stat::Column::PlayerId)
            .limit(limit)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod upsert_many {
        use pitchside_test_utils::prelude::*;

        use crate::server::data::stats::player_season_stat::{
            PlayerSeasonStatRepository, PlayerSeasonStatUpsert,
        };

        /// A transfer leaves two rows for the same player in one edition,
        /// and re-upserting either replaces it
        #[tokio::test]
        async fn keeps_one_row_per_team() -> Result<(), TestError> {
            let test = test_context_with_catalog_tables().await?;
            let competition = insert_competition(&test.db, "premier").await?;
            let season = insert_season(
                &test.db,
                "2024/25",
                date(2024, 8, 1),
                date(2025, 6, 30),
                true,
            )
            .await?;
            let edition = insert_competition_season(&test.db, competition.id, season.id).await?;
            let albion = insert_team(&test.db, "albion").await?;
            let mersey = insert_team(&test.db, "mersey").await?;
            let player = insert_player(&test.db, "jo-striker").await?;

            let stat_line = |team_id: i32, goals: i32| PlayerSeasonStatUpsert {
                player_id: player.id,
                team_id,
                appearances: 10,
                goals,
                assists: 2,
                yellow_cards: 1,
                red_cards: 0,
            };

            let stat_repo = PlayerSeasonStatRepository::new(&test.db);
            stat_repo
                .upsert_many(edition.id, vec![stat_line(albion.id, 5)])
                .await?;
            stat_repo
                .upsert_many(
                    edition.id,
                    vec![stat_line(albion.id, 6), stat_line(mersey.id, 3)],
                )
                .await?;

            let lines = stat_repo.list_for_player(player.id).await?;

            assert_eq!(lines.len(), 2);
            let albion_line = lines
                .iter()
                .find(|l| l.team_id == albion.id)
                .ok_or_else(|| TestError::Setup("missing albion line".into()))?;
            assert_eq!(albion_line.goals, 6);

            Ok(())
        }
    }
}
