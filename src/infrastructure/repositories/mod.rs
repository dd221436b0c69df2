// src/infrastructure/repositories/mod.rs
mod content;
mod error;
pub mod memory;
mod postgres_article;
mod postgres_company;
mod postgres_course;
mod postgres_enrollment;
mod postgres_tag;
mod postgres_user;

pub use error::map_sqlx;
pub use memory::InMemoryStore;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_company::PostgresCompanyRepository;
pub use postgres_course::PostgresCourseRepository;
pub use postgres_enrollment::PostgresEnrollmentRepository;
pub use postgres_tag::PostgresTagRepository;
pub use postgres_user::PostgresUserRepository;
