use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Schema};

use crate::error::TestError;

pub struct TestContext {
    pub db: DatabaseConnection,
}

/// Fresh in-memory sqlite database with no tables created.
pub async fn test_context() -> Result<TestContext, TestError> {
    let db = Database::connect("sqlite::memory:").await?;

    Ok(TestContext { db })
}

/// Create the reference-data and stats tables (venues through player season
/// stats).
pub async fn create_catalog_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(DbBackend::Sqlite);

    let stmts = vec![
        schema.create_table_from_entity(entity::prelude::Venue),
        schema.create_table_from_entity(entity::prelude::Competition),
        schema.create_table_from_entity(entity::prelude::Season),
        schema.create_table_from_entity(entity::prelude::CompetitionSeason),
        schema.create_table_from_entity(entity::prelude::Team),
        schema.create_table_from_entity(entity::prelude::Player),
        schema.create_table_from_entity(entity::prelude::PlayerTeamHistory),
        schema.create_table_from_entity(entity::prelude::TeamVenueHistory),
        schema.create_table_from_entity(entity::prelude::Fixture),
        schema.create_table_from_entity(entity::prelude::FixtureEvent),
        schema.create_table_from_entity(entity::prelude::Standing),
        schema.create_table_from_entity(entity::prelude::PlayerSeasonStat),
    ];

    for stmt in stmts {
        db.execute(&stmt).await?;
    }

    // Composite unique indexes live in the migrations; the ones upserts
    // conflict on have to be recreated here by hand.
    db.execute_unprepared(
        "CREATE UNIQUE INDEX uniq_competition_season ON competition_season (competition_id, season_id)",
    )
    .await?;
    db.execute_unprepared(
        "CREATE UNIQUE INDEX uniq_standing_team ON standing (competition_season_id, team_id)",
    )
    .await?;
    db.execute_unprepared(
        "CREATE UNIQUE INDEX uniq_player_season_stat ON player_season_stat (player_id, competition_season_id, team_id)",
    )
    .await?;

    Ok(())
}

/// Create the account-side tables (accounts, sessions, subscriptions,
/// usage, follows, predictions, notifications).
pub async fn create_account_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(DbBackend::Sqlite);

    let stmts = vec![
        schema.create_table_from_entity(entity::prelude::Account),
        schema.create_table_from_entity(entity::prelude::Session),
        schema.create_table_from_entity(entity::prelude::Subscription),
        schema.create_table_from_entity(entity::prelude::UsageLimit),
        schema.create_table_from_entity(entity::prelude::Follow),
        schema.create_table_from_entity(entity::prelude::Prediction),
        schema.create_table_from_entity(entity::prelude::Notification),
    ];

    for stmt in stmts {
        db.execute(&stmt).await?;
    }

    db.execute_unprepared(
        "CREATE UNIQUE INDEX uniq_usage_limit_day ON usage_limit (account_id, feature, day)",
    )
    .await?;
    db.execute_unprepared(
        "CREATE UNIQUE INDEX uniq_follow_entity ON follow (account_id, entity_type, entity_id)",
    )
    .await?;
    db.execute_unprepared(
        "CREATE UNIQUE INDEX uniq_prediction_fixture ON prediction (account_id, fixture_id)",
    )
    .await?;

    Ok(())
}

/// Context with every table created.
pub async fn test_context_with_all_tables() -> Result<TestContext, TestError> {
    let test = test_context().await?;

    create_catalog_tables(&test.db).await?;
    create_account_tables(&test.db).await?;

    Ok(test)
}

/// Context with only the catalog tables.
pub async fn test_context_with_catalog_tables() -> Result<TestContext, TestError> {
    let test = test_context().await?;

    create_catalog_tables(&test.db).await?;

    Ok(test)
}

/// Context with only the account tables.
pub async fn test_context_with_account_tables() -> Result<TestContext, TestError> {
    let test = test_context().await?;

    create_account_tables(&test.db).await?;

    Ok(test)
}
