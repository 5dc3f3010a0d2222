use chrono::Utc;
use sea_orm::DatabaseConnection;

use entity::enums::FixtureStatus;

use crate::{
    model::account::{PredictionDto, PredictionRequestDto},
    server::{
        data::{account::prediction::PredictionRepository, stats::fixture::FixtureRepository},
        error::{catalog::CatalogError, Error},
    },
};

pub struct PredictionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PredictionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits or replaces a score prediction. Predictions close at
    /// kickoff and never open for finished or postponed fixtures.
    pub async fn submit(
        &self,
        account_id: i32,
        fixture_id: i32,
        request: PredictionRequestDto,
    ) -> Result<PredictionDto, Error> {
        if request.home_score < 0 || request.away_score < 0 {
            return Err(Error::Validation("Scores cannot be negative".to_string()));
        }

        let fixture = FixtureRepository::new(self.db)
            .get(fixture_id)
            .await?
            .ok_or(CatalogError::FixtureNotFound(fixture_id))?;

        if fixture.status != FixtureStatus::Scheduled
            || fixture.kickoff <= Utc::now().naive_utc()
        {
            return Err(Error::Validation(
                "Predictions close at kickoff".to_string(),
            ));
        }

        let prediction = PredictionRepository::new(self.db)
            .upsert(account_id, fixture_id, request.home_score, request.away_score)
            .await?;

        Ok(prediction_dto(prediction))
    }

    pub async fn list(&self, account_id: i32) -> Result<Vec<PredictionDto>, Error> {
        let predictions = PredictionRepository::new(self.db)
            .list_for_account(account_id)
            .await?;

        Ok(predictions.into_iter().map(prediction_dto).collect())
    }
}

fn prediction_dto(prediction: entity::prediction::Model) -> PredictionDto {
    PredictionDto {
        fixture_id: prediction.fixture_id,
        home_score: prediction.home_score,
        away_score: prediction.away_score,
        updated_at: prediction.updated_at,
    }
}
