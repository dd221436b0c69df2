use std::sync::Arc;

use crate::{
    application::{
        ports::{telemetry::ViewTracker, time::Clock},
        services::access::AccessService,
    },
    domain::article::ArticleReadRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) access: Arc<AccessService>,
    pub(super) views: Arc<dyn ViewTracker>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        access: Arc<AccessService>,
        views: Arc<dyn ViewTracker>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            access,
            views,
            clock,
        }
    }
}
