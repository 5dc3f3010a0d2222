use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use sea_orm::{DatabaseConnection, TransactionTrait};

use entity::enums::AffiliationKind;

use crate::{
    model::catalog::{AffiliationDto, EndAffiliationDto, TransferDto},
    server::{
        data::catalog::{
            affiliation::AffiliationRepository, player::PlayerRepository, season::SeasonRepository,
            team::TeamRepository, team_venue::TeamVenueRepository, venue::VenueRepository,
        },
        error::{catalog::CatalogError, Error},
        model::{interval::Interval, temporal::TemporalContext},
    },
};

/// Temporal queries and mutations over the affiliation ledgers.
///
/// "Which team does this player play for" is always answered relative to a
/// date or a season window; mutations never rewrite history, they close
/// rows and open new ones.
pub struct AffiliationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AffiliationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The player's full ledger, oldest stint first.
    pub async fn player_history(&self, player_slug: &str) -> Result<Vec<AffiliationDto>, Error> {
        let player = self.require_player(player_slug).await?;

        let rows = AffiliationRepository::new(self.db)
            .history_for_player(player.id)
            .await?;

        self.with_team_identities(rows).await
    }

    /// The player's team(s) in a temporal context: today's affiliations
    /// for `Current`, interval overlap with the season window otherwise.
    pub async fn player_teams(
        &self,
        player_slug: &str,
        ctx: TemporalContext,
        today: NaiveDate,
    ) -> Result<Vec<AffiliationDto>, Error> {
        let player = self.require_player(player_slug).await?;
        let affiliation_repo = AffiliationRepository::new(self.db);

        let rows = match ctx {
            TemporalContext::Current => affiliation_repo.for_player_on(player.id, today).await?,
            TemporalContext::Season(season_id) => {
                let season = SeasonRepository::new(self.db)
                    .get(season_id)
                    .await?
                    .ok_or(CatalogError::SeasonNotFound(season_id))?;

                affiliation_repo
                    .for_player_overlapping(player.id, season.start_date, season.end_date)
                    .await?
            }
        };

        self.with_team_identities(rows).await
    }

    /// Everyone affiliated with the team in the context window. A
    /// mid-season arrival or departure still makes the roster.
    pub async fn team_roster(
        &self,
        team_slug: &str,
        ctx: TemporalContext,
        today: NaiveDate,
    ) -> Result<Vec<AffiliationDto>, Error> {
        let team = self.require_team(team_slug).await?;
        let affiliation_repo = AffiliationRepository::new(self.db);

        let (window_start, window_end) = match ctx {
            TemporalContext::Current => (today, today),
            TemporalContext::Season(season_id) => {
                let season = SeasonRepository::new(self.db)
                    .get(season_id)
                    .await?
                    .ok_or(CatalogError::SeasonNotFound(season_id))?;

                (season.start_date, season.end_date)
            }
        };

        let rows = affiliation_repo
            .for_team_overlapping(team.id, window_start, window_end)
            .await?;

        let player_ids = rows.iter().map(|r| r.player_id).collect::<Vec<_>>();
        let players = PlayerRepository::new(self.db).get_many(player_ids).await?;
        let players: HashMap<i32, _> = players.into_iter().map(|p| (p.id, p)).collect();

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                players.get(&row.player_id).map(|player| AffiliationDto {
                    entity_id: player.id,
                    entity_slug: player.slug.clone(),
                    entity_name: player.name.clone(),
                    kind: kind_label(row.kind).to_string(),
                    valid_from: row.valid_from,
                    valid_to: row.valid_to,
                })
            })
            .collect())
    }

    /// Moves a player: the open affiliation of the same kind, if any, is
    /// closed the day before the new one starts, atomically.
    pub async fn transfer(
        &self,
        player_slug: &str,
        transfer: TransferDto,
    ) -> Result<AffiliationDto, Error> {
        let player = self.require_player(player_slug).await?;
        let team = self.require_team(&transfer.team_slug).await?;
        let kind: AffiliationKind = transfer.kind.into();

        let closing_date = transfer
            .effective_date
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| Error::Validation("Effective date out of range".to_string()))?;

        let txn = self.db.begin().await?;

        let affiliation_repo = AffiliationRepository::new(&txn);

        if let Some(open) = affiliation_repo.find_open(player.id, kind).await? {
            if open.valid_from >= transfer.effective_date {
                return Err(Error::Validation(
                    "Effective date must fall after the current affiliation start".to_string(),
                ));
            }

            affiliation_repo.close(open.id, closing_date).await?;
        }

        let row = affiliation_repo
            .open(player.id, team.id, kind, transfer.effective_date)
            .await?;

        txn.commit().await?;

        Ok(AffiliationDto {
            entity_id: team.id,
            entity_slug: team.slug,
            entity_name: team.name,
            kind: kind_label(row.kind).to_string(),
            valid_from: row.valid_from,
            valid_to: row.valid_to,
        })
    }

    /// Ends an open affiliation without a successor (release, loan end).
    pub async fn end_affiliation(
        &self,
        player_slug: &str,
        request: EndAffiliationDto,
    ) -> Result<AffiliationDto, Error> {
        let player = self.require_player(player_slug).await?;
        let kind: AffiliationKind = request.kind.into();

        let affiliation_repo = AffiliationRepository::new(self.db);

        let open = affiliation_repo
            .find_open(player.id, kind)
            .await?
            .ok_or_else(|| CatalogError::NoOpenAffiliation {
                player_id: player.id,
                kind: kind_label(kind).to_string(),
            })?;

        if !Interval::open(open.valid_from).contains(request.end_date) {
            return Err(Error::Validation(
                "End date precedes the affiliation start".to_string(),
            ));
        }

        let closed = affiliation_repo
            .close(open.id, request.end_date)
            .await?
            .ok_or_else(|| Error::Validation("Affiliation vanished mid-update".to_string()))?;

        let team = TeamRepository::new(self.db)
            .get(closed.team_id)
            .await?
            .ok_or_else(|| CatalogError::EntityNotFound {
                entity_type: "team".to_string(),
                slug: closed.team_id.to_string(),
            })?;

        Ok(AffiliationDto {
            entity_id: team.id,
            entity_slug: team.slug,
            entity_name: team.name,
            kind: kind_label(closed.kind).to_string(),
            valid_from: closed.valid_from,
            valid_to: closed.valid_to,
        })
    }

    /// The team's home ground on a given date, if it had one.
    pub async fn team_venue_on(
        &self,
        team_slug: &str,
        on: NaiveDate,
    ) -> Result<Option<AffiliationDto>, Error> {
        let team = self.require_team(team_slug).await?;

        let tenancy = TeamVenueRepository::new(self.db)
            .for_team_on(team.id, on)
            .await?;

        Ok(tenancy.and_then(|(row, venue)| {
            venue.map(|venue| AffiliationDto {
                entity_id: venue.id,
                entity_slug: venue.slug,
                entity_name: venue.name,
                kind: "home_ground".to_string(),
                valid_from: row.valid_from,
                valid_to: row.valid_to,
            })
        }))
    }

    /// The team's home ground(s) in a temporal context, mirroring
    /// [`Self::player_teams`].
    pub async fn team_venues(
        &self,
        team_slug: &str,
        ctx: TemporalContext,
        today: NaiveDate,
    ) -> Result<Vec<AffiliationDto>, Error> {
        let team = self.require_team(team_slug).await?;

        let (window_start, window_end) = match ctx {
            TemporalContext::Current => (today, today),
            TemporalContext::Season(season_id) => {
                let season = SeasonRepository::new(self.db)
                    .get(season_id)
                    .await?
                    .ok_or(CatalogError::SeasonNotFound(season_id))?;

                (season.start_date, season.end_date)
            }
        };

        let tenancies = TeamVenueRepository::new(self.db)
            .for_team_overlapping(team.id, window_start, window_end)
            .await?;

        Ok(tenancies
            .into_iter()
            .filter_map(|(row, venue)| {
                venue.map(|venue| AffiliationDto {
                    entity_id: venue.id,
                    entity_slug: venue.slug,
                    entity_name: venue.name,
                    kind: "home_ground".to_string(),
                    valid_from: row.valid_from,
                    valid_to: row.valid_to,
                })
            })
            .collect())
    }

    /// Moves the team to a new home ground, closing the open tenancy the
    /// day before.
    pub async fn move_home_ground(
        &self,
        team_slug: &str,
        venue_slug: &str,
        effective_date: NaiveDate,
    ) -> Result<AffiliationDto, Error> {
        let team = self.require_team(team_slug).await?;

        let venue = VenueRepository::new(self.db)
            .get_by_slug(venue_slug)
            .await?
            .ok_or_else(|| CatalogError::EntityNotFound {
                entity_type: "venue".to_string(),
                slug: venue_slug.to_string(),
            })?;

        let closing_date = effective_date
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| Error::Validation("Effective date out of range".to_string()))?;

        let txn = self.db.begin().await?;

        let tenancy_repo = TeamVenueRepository::new(&txn);

        if let Some(open) = tenancy_repo.find_open(team.id).await? {
            if open.valid_from >= effective_date {
                return Err(Error::Validation(
                    "Effective date must fall after the current tenancy start".to_string(),
                ));
            }

            tenancy_repo.close(open.id, closing_date).await?;
        }

        let row = tenancy_repo.open(team.id, venue.id, effective_date).await?;

        txn.commit().await?;

        Ok(AffiliationDto {
            entity_id: venue.id,
            entity_slug: venue.slug,
            entity_name: venue.name,
            kind: "home_ground".to_string(),
            valid_from: row.valid_from,
            valid_to: row.valid_to,
        })
    }

    async fn require_player(&self, slug: &str) -> Result<entity::player::Model, Error> {
        PlayerRepository::new(self.db)
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| {
                CatalogError::EntityNotFound {
                    entity_type: "player".to_string(),
                    slug: slug.to_string(),
                }
                .into()
            })
    }

    async fn require_team(&self, slug: &str) -> Result<entity::team::Model, Error> {
        TeamRepository::new(self.db)
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| {
                CatalogError::EntityNotFound {
                    entity_type: "team".to_string(),
                    slug: slug.to_string(),
                }
                .into()
            })
    }

    async fn with_team_identities(
        &self,
        rows: Vec<entity::player_team_history::Model>,
    ) -> Result<Vec<AffiliationDto>, Error> {
        let team_ids = rows.iter().map(|r| r.team_id).collect::<Vec<_>>();
        let teams = TeamRepository::new(self.db).get_many(team_ids).await?;
        let teams: HashMap<i32, _> = teams.into_iter().map(|t| (t.id, t)).collect();

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                teams.get(&row.team_id).map(|team| AffiliationDto {
                    entity_id: team.id,
                    entity_slug: team.slug.clone(),
                    entity_name: team.name.clone(),
                    kind: kind_label(row.kind).to_string(),
                    valid_from: row.valid_from,
                    valid_to: row.valid_to,
                })
            })
            .collect())
    }
}

fn kind_label(kind: AffiliationKind) -> &'static str {
    match kind {
        AffiliationKind::Contract => "contract",
        AffiliationKind::Loan => "loan",
    }
}
