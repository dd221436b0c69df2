// src/application/commands/courses/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::{access::AccessService, catalog::CourseCatalog, tags::TagValidator},
    },
    domain::{
        access::ContentAccess,
        company::CompanyRepository,
        course::{ChapterRepository, Course, CourseWriteRepository, LessonRepository},
        enrollment::EnrollmentRepository,
    },
};

pub struct CourseCommandService {
    pub(super) write_repo: Arc<dyn CourseWriteRepository>,
    pub(super) chapters: Arc<dyn ChapterRepository>,
    pub(super) lessons: Arc<dyn LessonRepository>,
    pub(super) companies: Arc<dyn CompanyRepository>,
    pub(super) enrollments: Arc<dyn EnrollmentRepository>,
    pub(super) catalog: Arc<CourseCatalog>,
    pub(super) access: Arc<AccessService>,
    pub(super) tags: Arc<TagValidator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CourseCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn CourseWriteRepository>,
        chapters: Arc<dyn ChapterRepository>,
        lessons: Arc<dyn LessonRepository>,
        companies: Arc<dyn CompanyRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
        catalog: Arc<CourseCatalog>,
        access: Arc<AccessService>,
        tags: Arc<TagValidator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            chapters,
            lessons,
            companies,
            enrollments,
            catalog,
            access,
            tags,
            clock,
        }
    }

    /// Resolves ownership and fails unless `actor` may edit the course.
    pub(super) async fn editable(
        &self,
        actor: &AuthenticatedUser,
        course: &Course,
    ) -> ApplicationResult<ContentAccess> {
        let access = self.access.course_access(Some(actor), course).await?;
        if access.can_edit() {
            Ok(access)
        } else {
            tracing::debug!(course_id = %course.id, actor_id = %actor.id, "course edit denied");
            Err(ApplicationError::forbidden(
                "insufficient privileges to edit course",
            ))
        }
    }
}
