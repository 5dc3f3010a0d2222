pub mod password;
pub mod register;
pub mod sessions;
