use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use entity::enums::AffiliationKind;

/// Repository over the append-only player-team ledger.
///
/// Rows are opened with `valid_to = NULL` and later closed in place; a
/// transfer is a close followed by an open, never an update of team_id.
pub struct AffiliationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AffiliationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn open(
        &self,
        player_id: i32,
        team_id: i32,
        kind: AffiliationKind,
        valid_from: NaiveDate,
    ) -> Result<entity::player_team_history::Model, DbErr> {
        let affiliation = entity::player_team_history::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            team_id: ActiveValue::Set(team_id),
            kind: ActiveValue::Set(kind),
            valid_from: ActiveValue::Set(valid_from),
            valid_to: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        affiliation.insert(self.db).await
    }

    /// Closes an open row by setting its `valid_to`. Returns `Ok(None)`
    /// when the row does not exist.
    pub async fn close(
        &self,
        affiliation_id: i32,
        valid_to: NaiveDate,
    ) -> Result<Option<entity::player_team_history::Model>, DbErr> {
        let affiliation = match entity::prelude::PlayerTeamHistory::find_by_id(affiliation_id)
            .one(self.db)
            .await?
        {
            Some(affiliation) => affiliation,
            None => return Ok(None),
        };

        let mut affiliation_am = affiliation.into_active_model();
        affiliation_am.valid_to = ActiveValue::Set(Some(valid_to));

        let affiliation = affiliation_am.update(self.db).await?;

        Ok(Some(affiliation))
    }

    /// The open row of this kind for the player, if any. The ledger allows
    /// at most one per (player, kind).
    pub async fn find_open(
        &self,
        player_id: i32,
        kind: AffiliationKind,
    ) -> Result<Option<entity::player_team_history::Model>, DbErr> {
        entity::prelude::PlayerTeamHistory::find()
            .filter(entity::player_team_history::Column::PlayerId.eq(player_id))
            .filter(entity::player_team_history::Column::Kind.eq(kind))
            .filter(entity::player_team_history::Column::ValidTo.is_null())
            .one(self.db)
            .await
    }

    /// All rows for the player whose interval covers the given date.
    pub async fn for_player_on(
        &self,
        player_id: i32,
        on: NaiveDate,
    ) -> Result<Vec<entity::player_team_history::Model>, DbErr> {
        entity::prelude::PlayerTeamHistory::find()
            .filter(entity::player_team_history::Column::PlayerId.eq(player_id))
            .filter(Self::covers(on))
            .order_by_asc(entity::player_team_history::Column::ValidFrom)
            .all(self.db)
            .await
    }

    /// Rows for the player whose interval overlaps `[window_start,
    /// window_end]`. Overlap, not containment: a mid-window transfer
    /// yields rows for both teams.
    pub async fn for_player_overlapping(
        &self,
        player_id: i32,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> Result<Vec<entity::player_team_history::Model>, DbErr> {
        entity::prelude::PlayerTeamHistory::find()
            .filter(entity::player_team_history::Column::PlayerId.eq(player_id))
            .filter(Self::overlaps(window_start, window_end))
            .order_by_asc(entity::player_team_history::Column::ValidFrom)
            .all(self.db)
            .await
    }

    /// Rows for the team whose interval overlaps the window; the season
    /// roster query.
    pub async fn for_team_overlapping(
        &self,
        team_id: i32,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> Result<Vec<entity::player_team_history::Model>, DbErr> {
        entity::prelude::PlayerTeamHistory::find()
            .filter(entity::player_team_history::Column::TeamId.eq(team_id))
            .filter(Self::overlaps(window_start, window_end))
            .order_by_asc(entity::player_team_history::Column::ValidFrom)
            .all(self.db)
            .await
    }

    /// The full ledger for a player, oldest first.
    pub async fn history_for_player(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::player_team_history::Model>, DbErr> {
        entity::prelude::PlayerTeamHistory::find()
            .filter(entity::player_team_history::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::player_team_history::Column::ValidFrom)
            .order_by_asc(entity::player_team_history::Column::Id)
            .all(self.db)
            .await
    }

    fn covers(on: NaiveDate) -> Condition {
        Condition::all()
            .add(entity::player_team_history::Column::ValidFrom.lte(on))
            .add(
                Condition::any()
                    .add(entity::player_team_history::Column::ValidTo.is_null())
                    .add(entity::player_team_history::Column::ValidTo.gte(on)),
            )
    }

    fn overlaps(window_start: NaiveDate, window_end: NaiveDate) -> Condition {
        Condition::all()
            .add(entity::player_team_history::Column::ValidFrom.lte(window_end))
            .add(
                Condition::any()
                    .add(entity::player_team_history::Column::ValidTo.is_null())
                    .add(entity::player_team_history::Column::ValidTo.gte(window_start)),
            )
    }
}
