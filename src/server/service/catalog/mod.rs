pub mod affiliation;
pub mod entity;
pub mod season;
