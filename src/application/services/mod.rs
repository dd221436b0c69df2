// src/application/services/mod.rs
pub mod access;
pub mod catalog;
pub mod tags;
pub mod views;

use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, companies::CompanyCommandService,
            courses::CourseCommandService, enrollments::EnrollmentCommandService,
        },
        ports::{telemetry::ViewTracker, time::Clock},
        queries::{
            articles::ArticleQueryService, companies::CompanyQueryService,
            courses::CourseQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        company::CompanyRepository,
        course::{ChapterRepository, CourseReadRepository, CourseWriteRepository, LessonRepository},
        enrollment::EnrollmentRepository,
        tag::TagRepository,
        user::UserRepository,
    },
};

use self::{access::AccessService, catalog::CourseCatalog, tags::TagValidator};

/// Every store and port the engine consumes.
#[derive(Clone)]
pub struct Collaborators {
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub course_write_repo: Arc<dyn CourseWriteRepository>,
    pub course_read_repo: Arc<dyn CourseReadRepository>,
    pub chapter_repo: Arc<dyn ChapterRepository>,
    pub lesson_repo: Arc<dyn LessonRepository>,
    pub company_repo: Arc<dyn CompanyRepository>,
    pub enrollment_repo: Arc<dyn EnrollmentRepository>,
    pub tag_repo: Arc<dyn TagRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub view_tracker: Arc<dyn ViewTracker>,
    pub clock: Arc<dyn Clock>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub course_commands: Arc<CourseCommandService>,
    pub course_queries: Arc<CourseQueryService>,
    pub company_commands: Arc<CompanyCommandService>,
    pub company_queries: Arc<CompanyQueryService>,
    pub enrollment_commands: Arc<EnrollmentCommandService>,
}

impl ApplicationServices {
    pub fn new(deps: Collaborators) -> Self {
        let access = Arc::new(AccessService::new(Arc::clone(&deps.company_repo)));
        let tags = Arc::new(TagValidator::new(Arc::clone(&deps.tag_repo)));
        let catalog = Arc::new(CourseCatalog::new(
            Arc::clone(&deps.course_read_repo),
            Arc::clone(&deps.chapter_repo),
            Arc::clone(&deps.lesson_repo),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&deps.article_write_repo),
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&access),
            Arc::clone(&tags),
            Arc::clone(&deps.clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&access),
            Arc::clone(&deps.view_tracker),
            Arc::clone(&deps.clock),
        ));

        let course_commands = Arc::new(CourseCommandService::new(
            Arc::clone(&deps.course_write_repo),
            Arc::clone(&deps.chapter_repo),
            Arc::clone(&deps.lesson_repo),
            Arc::clone(&deps.company_repo),
            Arc::clone(&deps.enrollment_repo),
            Arc::clone(&catalog),
            Arc::clone(&access),
            Arc::clone(&tags),
            Arc::clone(&deps.clock),
        ));

        let course_queries = Arc::new(CourseQueryService::new(
            Arc::clone(&catalog),
            Arc::clone(&deps.enrollment_repo),
            Arc::clone(&access),
            Arc::clone(&deps.view_tracker),
            Arc::clone(&deps.clock),
        ));

        let company_commands = Arc::new(CompanyCommandService::new(
            Arc::clone(&deps.company_repo),
            Arc::clone(&deps.user_repo),
            Arc::clone(&catalog),
            Arc::clone(&access),
            Arc::clone(&deps.clock),
        ));

        let company_queries = Arc::new(CompanyQueryService::new(
            Arc::clone(&deps.company_repo),
            access,
        ));

        let enrollment_commands = Arc::new(EnrollmentCommandService::new(
            Arc::clone(&deps.enrollment_repo),
            catalog,
        ));

        Self {
            article_commands,
            article_queries,
            course_commands,
            course_queries,
            company_commands,
            company_queries,
            enrollment_commands,
        }
    }
}
