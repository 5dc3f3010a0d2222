pub mod results;
pub mod standings;
