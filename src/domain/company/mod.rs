// src/domain/company/mod.rs
pub mod entity;
pub mod ownership;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Company, CompanyCourseLink, CompanyUserLink};
pub use ownership::Ownership;
pub use repository::CompanyRepository;
pub use services::OwnershipResolver;
pub use value_objects::{CompanyId, CompanyRole};
