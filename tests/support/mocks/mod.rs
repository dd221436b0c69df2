// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod companies;
pub mod telemetry;
pub mod time;

pub use companies::VanishingCompanyRepository;
pub use telemetry::FailingViewTracker;
pub use time::{FixedClock, fixed_now};
