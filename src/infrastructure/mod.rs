// src/infrastructure/mod.rs
pub mod database;
pub mod repositories;
pub mod telemetry;
pub mod time;
