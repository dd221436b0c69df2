// src/application/ports/mod.rs
pub mod telemetry;
pub mod time;
