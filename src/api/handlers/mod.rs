pub mod health;
pub mod metrics;
pub mod roster;
pub mod students;
