pub mod access;
pub mod article;
pub mod company;
pub mod content;
pub mod course;
pub mod enrollment;
pub mod errors;
pub mod tag;
pub mod user;
