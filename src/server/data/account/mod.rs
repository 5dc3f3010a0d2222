pub mod account;
pub mod follow;
pub mod notification;
pub mod prediction;
pub mod session;
pub mod subscription;
pub mod usage;
