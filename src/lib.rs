pub mod calendar;
pub mod cli;
pub mod core;
pub mod engine;
pub mod holidays;
