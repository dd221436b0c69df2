// tests/support/builders.rs
use super::mocks::FixedClock;
use curricula_core::application::{
    ports::telemetry::ViewTracker,
    services::{ApplicationServices, Collaborators},
};
use curricula_core::domain::company::CompanyRepository;
use curricula_core::infrastructure::repositories::InMemoryStore;
use std::sync::Arc;

/// Engine wired to one shared in-memory store and a fixed clock.
pub struct TestApp {
    pub services: ApplicationServices,
    pub store: InMemoryStore,
    pub clock: Arc<FixedClock>,
}

type CompanyRepoFactory = Box<dyn FnOnce(InMemoryStore) -> Arc<dyn CompanyRepository>>;

pub struct TestAppBuilder {
    view_tracker: Option<Arc<dyn ViewTracker>>,
    company_repo: Option<CompanyRepoFactory>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TestAppBuilder {
        TestAppBuilder {
            view_tracker: None,
            company_repo: None,
        }
    }
}

impl TestAppBuilder {
    pub fn view_tracker(mut self, tracker: Arc<dyn ViewTracker>) -> Self {
        self.view_tracker = Some(tracker);
        self
    }

    /// Swaps the company repository for one built over the shared store.
    pub fn company_repo(
        mut self,
        wrap: impl FnOnce(InMemoryStore) -> Arc<dyn CompanyRepository> + 'static,
    ) -> Self {
        self.company_repo = Some(Box::new(wrap));
        self
    }

    pub fn build(self) -> TestApp {
        let store = InMemoryStore::new();
        let clock = Arc::new(FixedClock::new());
        let shared = Arc::new(store.clone());
        let view_tracker = self
            .view_tracker
            .unwrap_or_else(|| shared.clone() as Arc<dyn ViewTracker>);
        let company_repo = match self.company_repo {
            Some(wrap) => wrap(store.clone()),
            None => shared.clone() as Arc<dyn CompanyRepository>,
        };

        let services = ApplicationServices::new(Collaborators {
            article_write_repo: shared.clone(),
            article_read_repo: shared.clone(),
            course_write_repo: shared.clone(),
            course_read_repo: shared.clone(),
            chapter_repo: shared.clone(),
            lesson_repo: shared.clone(),
            company_repo,
            enrollment_repo: shared.clone(),
            tag_repo: shared.clone(),
            user_repo: shared,
            view_tracker,
            clock: clock.clone(),
        });

        TestApp {
            services,
            store,
            clock,
        }
    }
}
