//! Publication lifecycle and tiered content access for articles, courses and
//! lessons.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
