pub mod roster_seeder;
pub mod status_report;
