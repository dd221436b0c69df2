// src/application/commands/companies/mod.rs
mod links;
mod members;
mod service;

pub use links::{DeleteCourseLinkCommand, LinkCourseCommand, SuspendCourseLinkCommand};
pub use members::{AddMemberCommand, RemoveMemberCommand};
pub use service::CompanyCommandService;
