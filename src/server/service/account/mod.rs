pub mod auth;
pub mod follow;
pub mod notification;
pub mod prediction;
