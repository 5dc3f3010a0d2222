//! Small shared helpers: time bucketing, password hashing, token
//! generation.

pub mod password;
pub mod time;
pub mod token;
