pub mod entity;
pub mod transfers;
