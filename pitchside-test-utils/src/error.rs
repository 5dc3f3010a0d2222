use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error("Test setup failed: {0}")]
    Setup(String),
    /// An application error surfaced where the test expected success.
    #[error("{0}")]
    App(String),
}
