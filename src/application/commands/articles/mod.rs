// src/application/commands/articles/mod.rs
mod delete;
mod init;
mod publish;
mod react;
mod save;
mod service;

pub use delete::DeleteArticleCommand;
pub use init::InitArticleCommand;
pub use publish::PublishArticleCommand;
pub use react::AddArticleReactionCommand;
pub use save::{SaveArticleCommand, SaveArticleCommandBuilder};
pub use service::ArticleCommandService;
