//! Catalog fixture factories.
//!
//! Each function inserts one row with sensible defaults and returns the
//! model so tests can chain foreign keys explicitly.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use entity::enums::{AffiliationKind, EventKind, FixtureStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn insert_venue(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<entity::venue::Model, DbErr> {
    entity::venue::ActiveModel {
        slug: ActiveValue::Set(slug.to_string()),
        name: ActiveValue::Set(format!("{slug} Stadium")),
        city: ActiveValue::Set("Testville".to_string()),
        country: ActiveValue::Set("Testland".to_string()),
        capacity: ActiveValue::Set(Some(40_000)),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_competition(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<entity::competition::Model, DbErr> {
    entity::competition::ActiveModel {
        slug: ActiveValue::Set(slug.to_string()),
        name: ActiveValue::Set(format!("{slug} League")),
        country: ActiveValue::Set("Testland".to_string()),
        logo_url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_season(
    db: &DatabaseConnection,
    label: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    is_current: bool,
) -> Result<entity::season::Model, DbErr> {
    entity::season::ActiveModel {
        label: ActiveValue::Set(label.to_string()),
        start_date: ActiveValue::Set(start_date),
        end_date: ActiveValue::Set(end_date),
        is_current: ActiveValue::Set(is_current),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_competition_season(
    db: &DatabaseConnection,
    competition_id: i32,
    season_id: i32,
) -> Result<entity::competition_season::Model, DbErr> {
    entity::competition_season::ActiveModel {
        competition_id: ActiveValue::Set(competition_id),
        season_id: ActiveValue::Set(season_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_team(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<entity::team::Model, DbErr> {
    entity::team::ActiveModel {
        slug: ActiveValue::Set(slug.to_string()),
        name: ActiveValue::Set(format!("{slug} FC")),
        short_name: ActiveValue::Set(slug.to_uppercase()),
        country: ActiveValue::Set("Testland".to_string()),
        founded: ActiveValue::Set(Some(1900)),
        logo_url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_player(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<entity::player::Model, DbErr> {
    entity::player::ActiveModel {
        slug: ActiveValue::Set(slug.to_string()),
        name: ActiveValue::Set(slug.replace('-', " ")),
        position: ActiveValue::Set("Forward".to_string()),
        country: ActiveValue::Set("Testland".to_string()),
        date_of_birth: ActiveValue::Set(NaiveDate::from_ymd_opt(1998, 4, 2)),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_affiliation(
    db: &DatabaseConnection,
    player_id: i32,
    team_id: i32,
    kind: AffiliationKind,
    valid_from: NaiveDate,
    valid_to: Option<NaiveDate>,
) -> Result<entity::player_team_history::Model, DbErr> {
    entity::player_team_history::ActiveModel {
        player_id: ActiveValue::Set(player_id),
        team_id: ActiveValue::Set(team_id),
        kind: ActiveValue::Set(kind),
        valid_from: ActiveValue::Set(valid_from),
        valid_to: ActiveValue::Set(valid_to),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_team_venue(
    db: &DatabaseConnection,
    team_id: i32,
    venue_id: i32,
    valid_from: NaiveDate,
    valid_to: Option<NaiveDate>,
) -> Result<entity::team_venue_history::Model, DbErr> {
    entity::team_venue_history::ActiveModel {
        team_id: ActiveValue::Set(team_id),
        venue_id: ActiveValue::Set(venue_id),
        valid_from: ActiveValue::Set(valid_from),
        valid_to: ActiveValue::Set(valid_to),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Insert a finished fixture with the given score.
pub async fn insert_finished_fixture(
    db: &DatabaseConnection,
    competition_season_id: i32,
    home_team_id: i32,
    away_team_id: i32,
    kickoff: NaiveDateTime,
    home_score: i32,
    away_score: i32,
) -> Result<entity::fixture::Model, DbErr> {
    entity::fixture::ActiveModel {
        competition_season_id: ActiveValue::Set(competition_season_id),
        home_team_id: ActiveValue::Set(home_team_id),
        away_team_id: ActiveValue::Set(away_team_id),
        kickoff: ActiveValue::Set(kickoff),
        status: ActiveValue::Set(FixtureStatus::Finished),
        home_score: ActiveValue::Set(Some(home_score)),
        away_score: ActiveValue::Set(Some(away_score)),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_scheduled_fixture(
    db: &DatabaseConnection,
    competition_season_id: i32,
    home_team_id: i32,
    away_team_id: i32,
    kickoff: NaiveDateTime,
) -> Result<entity::fixture::Model, DbErr> {
    entity::fixture::ActiveModel {
        competition_season_id: ActiveValue::Set(competition_season_id),
        home_team_id: ActiveValue::Set(home_team_id),
        away_team_id: ActiveValue::Set(away_team_id),
        kickoff: ActiveValue::Set(kickoff),
        status: ActiveValue::Set(FixtureStatus::Scheduled),
        home_score: ActiveValue::Set(None),
        away_score: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_fixture_event(
    db: &DatabaseConnection,
    fixture_id: i32,
    team_id: i32,
    player_id: i32,
    minute: i32,
    kind: EventKind,
) -> Result<entity::fixture_event::Model, DbErr> {
    entity::fixture_event::ActiveModel {
        fixture_id: ActiveValue::Set(fixture_id),
        team_id: ActiveValue::Set(team_id),
        player_id: ActiveValue::Set(player_id),
        minute: ActiveValue::Set(minute),
        kind: ActiveValue::Set(kind),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}
