use std::sync::Arc;

use crate::{
    application::{
        ports::{telemetry::ViewTracker, time::Clock},
        services::{access::AccessService, catalog::CourseCatalog},
    },
    domain::enrollment::EnrollmentRepository,
};

pub struct CourseQueryService {
    pub(super) catalog: Arc<CourseCatalog>,
    pub(super) enrollments: Arc<dyn EnrollmentRepository>,
    pub(super) access: Arc<AccessService>,
    pub(super) views: Arc<dyn ViewTracker>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CourseQueryService {
    pub fn new(
        catalog: Arc<CourseCatalog>,
        enrollments: Arc<dyn EnrollmentRepository>,
        access: Arc<AccessService>,
        views: Arc<dyn ViewTracker>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            catalog,
            enrollments,
            access,
            views,
            clock,
        }
    }
}
