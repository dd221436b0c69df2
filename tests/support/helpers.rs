// tests/support/helpers.rs
use super::builders::TestApp;
use super::mocks::fixed_now;
use curricula_core::application::{
    commands::{
        articles::{InitArticleCommand, PublishArticleCommand, SaveArticleCommand},
        courses::{
            AddChapterCommand, InitCourseCommand, PublishCourseCommand, SaveLessonCommand,
        },
    },
    dto::AuthenticatedUser,
};
use curricula_core::domain::{
    company::{CompanyId, CompanyRepository, CompanyRole, CompanyUserLink},
    course::{CourseId, LessonType},
    user::{Plan, PlatformRole},
};

/// 40 characters, so a quarter teaser keeps 10 and a half teaser keeps 20.
pub const LESSON_CONTENT: &str = "0123456789abcdefghijABCDEFGHIJ0123456789";
pub const ARTICLE_BODY: &str = LESSON_CONTENT;

pub fn user(app: &TestApp, name: &str, role: PlatformRole, plan: Plan) -> AuthenticatedUser {
    let user = app
        .store
        .add_user(name, role, plan, fixed_now())
        .expect("seed user");
    AuthenticatedUser::from(&user)
}

pub fn member(app: &TestApp, name: &str) -> AuthenticatedUser {
    user(app, name, PlatformRole::Member, Plan::Free)
}

pub fn pro_member(app: &TestApp, name: &str) -> AuthenticatedUser {
    user(app, name, PlatformRole::Member, Plan::Pro)
}

pub fn admin(app: &TestApp, name: &str) -> AuthenticatedUser {
    user(app, name, PlatformRole::Admin, Plan::Free)
}

pub fn company(app: &TestApp, name: &str) -> i64 {
    app.store.add_company(name).expect("seed company").id.into()
}

pub async fn join(app: &TestApp, company_id: i64, who: &AuthenticatedUser, role: CompanyRole) {
    app.store
        .upsert_user_link(CompanyUserLink::new(CompanyId(company_id), who.id, role))
        .await
        .expect("seed membership");
}

pub fn enroll(app: &TestApp, who: &AuthenticatedUser, course_id: i64) {
    app.store
        .enroll(who.id, CourseId(course_id))
        .expect("seed enrollment");
}

/// Article written by `author` and published by `publisher`.
pub async fn published_article(
    app: &TestApp,
    author: &AuthenticatedUser,
    publisher: &AuthenticatedUser,
    premium: bool,
) -> i64 {
    let articles = &app.services.article_commands;
    let created = articles
        .init_article(
            author,
            InitArticleCommand {
                title: "Ownership in practice".into(),
            },
        )
        .await
        .expect("init article");
    articles
        .save_article(
            author,
            SaveArticleCommand::builder(created.id)
                .body(ARTICLE_BODY)
                .premium(premium)
                .build(),
        )
        .await
        .expect("save article");
    let published = articles
        .publish_article(publisher, PublishArticleCommand { id: created.id })
        .await
        .expect("publish article");
    assert!(published.status.is_published());
    created.id
}

pub struct CourseFixture {
    pub course_id: i64,
    pub chapter_id: i64,
    pub paid_lesson_id: i64,
    pub free_lesson_id: i64,
}

/// Draft course with one chapter holding a paid and a free lesson.
pub async fn draft_course(
    app: &TestApp,
    author: &AuthenticatedUser,
    company_id: Option<i64>,
) -> CourseFixture {
    let courses = &app.services.course_commands;
    let course = courses
        .init_course(
            author,
            InitCourseCommand {
                title: "Async Rust".into(),
                company_id,
            },
        )
        .await
        .expect("init course");
    let chapter = courses
        .add_chapter(
            author,
            AddChapterCommand {
                course_id: course.id,
                title: "Futures".into(),
            },
        )
        .await
        .expect("add chapter");

    let lesson = |free: bool| SaveLessonCommand {
        id: None,
        chapter_id: chapter.id,
        title: if free { "Preview".into() } else { "Deep dive".into() },
        content: LESSON_CONTENT.into(),
        free,
        lesson_type: LessonType::Text,
    };
    let paid = courses
        .save_lesson(author, lesson(false))
        .await
        .expect("paid lesson");
    let free = courses
        .save_lesson(author, lesson(true))
        .await
        .expect("free lesson");

    CourseFixture {
        course_id: course.id,
        chapter_id: chapter.id,
        paid_lesson_id: paid.id,
        free_lesson_id: free.id,
    }
}

pub async fn publish_course(app: &TestApp, publisher: &AuthenticatedUser, course_id: i64) {
    let course = app
        .services
        .course_commands
        .publish_course(publisher, PublishCourseCommand { id: course_id })
        .await
        .expect("publish course");
    assert!(course.status.is_published());
}

pub async fn published_course(
    app: &TestApp,
    author: &AuthenticatedUser,
    publisher: &AuthenticatedUser,
    company_id: Option<i64>,
) -> CourseFixture {
    let fixture = draft_course(app, author, company_id).await;
    publish_course(app, publisher, fixture.course_id).await;
    fixture
}
