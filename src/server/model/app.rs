use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Absolute session lifetime in days, from [`crate::server::config::Config`].
    pub session_ttl_days: i64,
}
