mod support;

use curricula_core::application::commands::courses::{
    AddChapterCommand, DeleteCourseCommand, DeleteLessonCommand, InitCourseCommand,
    PublishCourseCommand, SaveCourseCommand, SaveLessonCommand,
};
use curricula_core::application::queries::courses::{GetCourseByIdQuery, GetLessonQuery};
use curricula_core::domain::company::{CompanyRepository, CompanyRole};
use curricula_core::domain::content::ContentStatus;
use curricula_core::domain::course::{CourseId, LessonType};
use curricula_core::domain::company::CompanyId;
use std::sync::Arc;
use support::{
    TestApp, VanishingCompanyRepository, admin, company, draft_course, enroll, join, member,
    published_course,
};

#[tokio::test]
async fn company_editor_creates_linked_course() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let editor = member(&app, "eve");
    join(&app, acme, &editor, CompanyRole::Editor).await;

    let course = app
        .services
        .course_commands
        .init_course(
            &editor,
            InitCourseCommand {
                title: "Tokio".into(),
                company_id: Some(acme),
            },
        )
        .await
        .unwrap();

    assert_eq!(course.company_id, Some(acme));
    assert_eq!(course.status, ContentStatus::Draft);
    let link = app
        .store
        .active_course_link(CourseId(course.id))
        .await
        .unwrap()
        .expect("active link");
    assert_eq!(i64::from(link.company_id), acme);
}

#[tokio::test]
async fn viewers_and_outsiders_cannot_create_company_courses() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let viewer = member(&app, "vic");
    let outsider = member(&app, "olga");
    join(&app, acme, &viewer, CompanyRole::Viewer).await;

    for actor in [&viewer, &outsider] {
        let err = app
            .services
            .course_commands
            .init_course(
                actor,
                InitCourseCommand {
                    title: "Tokio".into(),
                    company_id: Some(acme),
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_forbidden());
    }
}

#[tokio::test]
async fn unknown_company_is_not_found() {
    let app = TestApp::new();
    let root = admin(&app, "root");

    let err = app
        .services
        .course_commands
        .init_course(
            &root,
            InitCourseCommand {
                title: "Tokio".into(),
                company_id: Some(4_242),
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn company_course_is_not_kept_when_its_link_cannot_be_written() {
    let gone = CompanyId(77);
    let app = TestApp::builder()
        .company_repo(move |store| {
            Arc::new(VanishingCompanyRepository::new(store, gone)) as Arc<dyn CompanyRepository>
        })
        .build();
    let root = admin(&app, "root");

    let err = app
        .services
        .course_commands
        .init_course(
            &root,
            InitCourseCommand {
                title: "Orphan".into(),
                company_id: Some(gone.into()),
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(app.store.course_ids().unwrap().is_empty());
    assert!(app.store.list_active_course_links(gone).await.unwrap().is_empty());
}

#[tokio::test]
async fn company_editor_publish_goes_to_review_and_company_admin_publishes() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let editor = member(&app, "eve");
    let boss = member(&app, "bea");
    join(&app, acme, &editor, CompanyRole::Editor).await;
    join(&app, acme, &boss, CompanyRole::Admin).await;
    let fixture = draft_course(&app, &editor, Some(acme)).await;
    let commands = &app.services.course_commands;

    let reviewed = commands
        .publish_course(&editor, PublishCourseCommand { id: fixture.course_id })
        .await
        .unwrap();
    assert_eq!(reviewed.status, ContentStatus::InReview);

    let published = commands
        .publish_course(&boss, PublishCourseCommand { id: fixture.course_id })
        .await
        .unwrap();
    assert_eq!(published.status, ContentStatus::Published);
    assert!(published.published_at.is_some());
}

#[tokio::test]
async fn company_admin_of_another_company_has_no_say() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let globex = company(&app, "Globex");
    let editor = member(&app, "eve");
    let rival = member(&app, "rick");
    join(&app, acme, &editor, CompanyRole::Editor).await;
    join(&app, globex, &rival, CompanyRole::Admin).await;
    let fixture = draft_course(&app, &editor, Some(acme)).await;

    let err = app
        .services
        .course_commands
        .save_course(
            &rival,
            SaveCourseCommand {
                title: Some("Hijacked".into()),
                ..SaveCourseCommand::new(fixture.course_id)
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_forbidden());
}

#[tokio::test]
async fn platform_member_publish_goes_to_review() {
    let app = TestApp::new();
    let author = member(&app, "alice");
    let fixture = draft_course(&app, &author, None).await;

    let course = app
        .services
        .course_commands
        .publish_course(&author, PublishCourseCommand { id: fixture.course_id })
        .await
        .unwrap();
    assert_eq!(course.status, ContentStatus::InReview);
    assert_eq!(course.company_id, None);
}

#[tokio::test]
async fn published_company_course_needs_admin_to_delete() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let editor = member(&app, "eve");
    let boss = member(&app, "bea");
    let root = admin(&app, "root");
    join(&app, acme, &editor, CompanyRole::Editor).await;
    join(&app, acme, &boss, CompanyRole::Admin).await;
    let fixture = published_course(&app, &editor, &root, Some(acme)).await;
    let commands = &app.services.course_commands;

    let err = commands
        .delete_course(&editor, DeleteCourseCommand { id: fixture.course_id })
        .await
        .unwrap_err();
    assert!(err.is_forbidden());

    commands
        .delete_course(&boss, DeleteCourseCommand { id: fixture.course_id })
        .await
        .unwrap();
    assert!(
        app.store
            .active_course_link(CourseId(fixture.course_id))
            .await
            .unwrap()
            .is_none()
    );
    assert_eq!(
        app.store
            .delete_course_links(CourseId(fixture.course_id))
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn company_editor_deletes_drafts() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let editor = member(&app, "eve");
    join(&app, acme, &editor, CompanyRole::Editor).await;
    let fixture = draft_course(&app, &editor, Some(acme)).await;

    app.services
        .course_commands
        .delete_course(&editor, DeleteCourseCommand { id: fixture.course_id })
        .await
        .unwrap();
}

#[tokio::test]
async fn enrolled_platform_course_cannot_be_deleted_even_by_admin() {
    let app = TestApp::new();
    let author = member(&app, "alice");
    let root = admin(&app, "root");
    let student = member(&app, "sam");
    let fixture = published_course(&app, &author, &root, None).await;
    enroll(&app, &student, fixture.course_id);
    let commands = &app.services.course_commands;

    for actor in [&author, &root] {
        let err = commands
            .delete_course(actor, DeleteCourseCommand { id: fixture.course_id })
            .await
            .unwrap_err();
        assert!(err.is_forbidden());
    }

    app.store
        .cancel_enrollment(student.id, CourseId(fixture.course_id))
        .unwrap();
    commands
        .delete_course(&author, DeleteCourseCommand { id: fixture.course_id })
        .await
        .unwrap();
}

#[tokio::test]
async fn deleting_a_course_removes_its_lessons() {
    let app = TestApp::new();
    let author = member(&app, "alice");
    let root = admin(&app, "root");
    let fixture = draft_course(&app, &author, None).await;

    app.services
        .course_commands
        .delete_course(&author, DeleteCourseCommand { id: fixture.course_id })
        .await
        .unwrap();

    let err = app
        .services
        .course_queries
        .view_lesson(Some(&root), GetLessonQuery { id: fixture.paid_lesson_id })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    let err = app
        .services
        .course_queries
        .view_course(Some(&root), GetCourseByIdQuery { id: fixture.course_id })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn chapters_are_appended_in_order() {
    let app = TestApp::new();
    let author = member(&app, "alice");
    let fixture = draft_course(&app, &author, None).await;

    let second = app
        .services
        .course_commands
        .add_chapter(
            &author,
            AddChapterCommand {
                course_id: fixture.course_id,
                title: "Pinning".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(second.position, 2);

    let course = app
        .services
        .course_queries
        .view_course(Some(&author), GetCourseByIdQuery { id: fixture.course_id })
        .await
        .unwrap();
    let titles: Vec<_> = course.chapters.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Futures", "Pinning"]);
}

#[tokio::test]
async fn lessons_stay_within_their_course() {
    let app = TestApp::new();
    let author = member(&app, "alice");
    let first = draft_course(&app, &author, None).await;
    let second = draft_course(&app, &author, None).await;

    let err = app
        .services
        .course_commands
        .save_lesson(
            &author,
            SaveLessonCommand {
                id: Some(first.paid_lesson_id),
                chapter_id: second.chapter_id,
                title: "Moved".into(),
                content: "body".into(),
                free: false,
                lesson_type: LessonType::Video,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        curricula_core::application::ApplicationError::Validation(_)
    ));

    let edited = app
        .services
        .course_commands
        .save_lesson(
            &author,
            SaveLessonCommand {
                id: Some(first.paid_lesson_id),
                chapter_id: first.chapter_id,
                title: "Edited".into(),
                content: "body".into(),
                free: true,
                lesson_type: LessonType::Quiz,
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.title, "Edited");
    assert!(edited.free);
    assert_eq!(edited.lesson_type, LessonType::Quiz);
}

#[tokio::test]
async fn strangers_cannot_touch_lessons() {
    let app = TestApp::new();
    let author = member(&app, "alice");
    let stranger = member(&app, "mallory");
    let fixture = draft_course(&app, &author, None).await;

    let err = app
        .services
        .course_commands
        .delete_lesson(&stranger, DeleteLessonCommand { id: fixture.free_lesson_id })
        .await
        .unwrap_err();
    assert!(err.is_forbidden());

    app.services
        .course_commands
        .delete_lesson(&author, DeleteLessonCommand { id: fixture.free_lesson_id })
        .await
        .unwrap();
}
