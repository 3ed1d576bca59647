pub mod retirement;
pub mod scenarios;
