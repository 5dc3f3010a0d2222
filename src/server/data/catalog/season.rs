use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct SeasonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, season_id: i32) -> Result<Option<entity::season::Model>, DbErr> {
        entity::prelude::Season::find_by_id(season_id)
            .one(self.db)
            .await
    }

    /// The season flagged `is_current`. Exactly one row carries the flag;
    /// if several ever do, the most recent start date wins.
    pub async fn get_current(&self) -> Result<Option<entity::season::Model>, DbErr> {
        entity::prelude::Season::find()
            .filter(entity::season::Column::IsCurrent.eq(true))
            .order_by_desc(entity::season::Column::StartDate)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::season::Model>, DbErr> {
        entity::prelude::Season::find()
            .order_by_desc(entity::season::Column::StartDate)
            .all(self.db)
            .await
    }

    /// Drops the `is_current` flag from every season that carries it.
    pub async fn clear_current(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Season::update_many()
            .col_expr(entity::season::Column::IsCurrent, Expr::value(false))
            .filter(entity::season::Column::IsCurrent.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn mark_current(
        &self,
        season_id: i32,
    ) -> Result<Option<entity::season::Model>, DbErr> {
        let Some(season) = self.get(season_id).await? else {
            return Ok(None);
        };

        let mut season = season.into_active_model();
        season.is_current = ActiveValue::Set(true);

        Ok(Some(season.update(self.db).await?))
    }
}
