use std::sync::Arc;

use crate::{
    application::services::catalog::CourseCatalog, domain::enrollment::EnrollmentRepository,
};

pub struct EnrollmentCommandService {
    pub(super) enrollments: Arc<dyn EnrollmentRepository>,
    pub(super) catalog: Arc<CourseCatalog>,
}

impl EnrollmentCommandService {
    pub fn new(enrollments: Arc<dyn EnrollmentRepository>, catalog: Arc<CourseCatalog>) -> Self {
        Self {
            enrollments,
            catalog,
        }
    }
}
