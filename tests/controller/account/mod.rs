pub mod export;
pub mod follows;
pub mod notifications;
pub mod predictions;
pub mod subscription;
pub mod usage;
