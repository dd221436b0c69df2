// src/domain/content/mod.rs
//! Pieces shared by every publishable item: title/body value objects, the
//! publication state machine, the reaction log and the disclosure policy.
pub mod disclosure;
pub mod reaction;
pub mod status;
pub mod value_objects;

pub use disclosure::{DenialReason, Disclosure, DisclosureRequest, TeaserRatio};
pub use reaction::{
    MAX_REACTIONS_PER_AUTHOR, Reaction, ReactionAction, ReactionLog, ReactionRejected,
};
pub use status::{ContentStatus, Publication, transition};
pub use value_objects::{ContentBody, ContentTitle};
