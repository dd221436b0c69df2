use std::{collections::BTreeSet, sync::Arc};

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::tag::{TagId, TagRepository},
};

/// Resolves raw tag ids, failing before any write if one does not exist.
pub struct TagValidator {
    tags: Arc<dyn TagRepository>,
}

impl TagValidator {
    pub fn new(tags: Arc<dyn TagRepository>) -> Self {
        Self { tags }
    }

    pub async fn resolve(&self, raw: &[i64]) -> ApplicationResult<BTreeSet<TagId>> {
        let mut resolved = BTreeSet::new();
        for &value in raw {
            let id = TagId::new(value)?;
            if !self.tags.exists(id).await? {
                return Err(ApplicationError::not_found(format!("tag {id} not found")));
            }
            resolved.insert(id);
        }
        Ok(resolved)
    }
}
