mod support;

use std::sync::Arc;

use curricula_core::application::ports::telemetry::ViewTarget;
use curricula_core::application::queries::articles::GetArticleByIdQuery;
use curricula_core::application::queries::courses::{GetCourseByIdQuery, GetLessonQuery};
use curricula_core::infrastructure::telemetry::DisabledViewTracker;
use support::{
    FailingViewTracker, TestApp, admin, member, pro_member, published_article, published_course,
};

#[tokio::test]
async fn reads_count_views_except_the_authors_own() {
    let app = TestApp::new();
    let author = member(&app, "alice");
    let root = admin(&app, "root");
    let reader = member(&app, "bob");
    let id = published_article(&app, &author, &root, false).await;
    let queries = &app.services.article_queries;

    queries
        .view_article(Some(&author), GetArticleByIdQuery { id })
        .await
        .unwrap();
    queries
        .view_article(Some(&reader), GetArticleByIdQuery { id })
        .await
        .unwrap();
    queries
        .view_article(None, GetArticleByIdQuery { id })
        .await
        .unwrap();

    let seen = queries
        .view_article(Some(&author), GetArticleByIdQuery { id })
        .await
        .unwrap();
    assert_eq!(seen.article.view_count, 2);

    let events = app.store.view_events().unwrap();
    let viewers: Vec<_> = events.iter().map(|event| event.viewer).collect();
    assert_eq!(viewers, vec![Some(reader.id), None]);
}

#[tokio::test]
async fn course_views_are_counted() {
    let app = TestApp::new();
    let author = member(&app, "alice");
    let root = admin(&app, "root");
    let reader = pro_member(&app, "carol");
    let fixture = published_course(&app, &author, &root, None).await;
    let queries = &app.services.course_queries;

    queries
        .view_course(Some(&reader), GetCourseByIdQuery { id: fixture.course_id })
        .await
        .unwrap();
    queries
        .view_lesson(Some(&reader), GetLessonQuery { id: fixture.paid_lesson_id })
        .await
        .unwrap();
    let course = queries
        .view_course(Some(&author), GetCourseByIdQuery { id: fixture.course_id })
        .await
        .unwrap();
    assert_eq!(course.course.view_count, 1);

    let targets: Vec<&str> = app
        .store
        .view_events()
        .unwrap()
        .iter()
        .map(|event| event.target.kind())
        .collect();
    assert_eq!(targets, ["course", "lesson"]);
}

#[tokio::test]
async fn views_do_not_bump_the_version() {
    use curricula_core::domain::article::{ArticleId, ArticleReadRepository};

    let app = TestApp::new();
    let author = member(&app, "alice");
    let root = admin(&app, "root");
    let id = published_article(&app, &author, &root, false).await;
    let before = ArticleReadRepository::find_by_id(&app.store, ArticleId(id))
        .await
        .unwrap()
        .unwrap()
        .version;

    app.services
        .article_queries
        .view_article(None, GetArticleByIdQuery { id })
        .await
        .unwrap();

    let after = ArticleReadRepository::find_by_id(&app.store, ArticleId(id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.version, before);
    assert_eq!(after.view_count, 1);
}

#[tokio::test]
async fn tracking_failures_do_not_break_reads() {
    let tracker = Arc::new(FailingViewTracker::default());
    let app = TestApp::builder().view_tracker(tracker.clone()).build();
    let author = member(&app, "alice");
    let root = admin(&app, "root");
    let reader = member(&app, "bob");
    let id = published_article(&app, &author, &root, true).await;
    let fixture = published_course(&app, &author, &root, None).await;

    let article = app
        .services
        .article_queries
        .view_article(Some(&reader), GetArticleByIdQuery { id })
        .await
        .unwrap();
    assert_eq!(article.article.id, id);

    let lesson = app
        .services
        .course_queries
        .view_lesson(None, GetLessonQuery { id: fixture.free_lesson_id })
        .await
        .unwrap();
    assert_eq!(lesson.id, fixture.free_lesson_id);

    assert_eq!(tracker.attempts(), 2);
}

#[tokio::test]
async fn disabled_tracking_records_nothing() {
    let app = TestApp::builder()
        .view_tracker(Arc::new(DisabledViewTracker))
        .build();
    let author = member(&app, "alice");
    let root = admin(&app, "root");
    let id = published_article(&app, &author, &root, false).await;

    let seen = app
        .services
        .article_queries
        .view_article(None, GetArticleByIdQuery { id })
        .await
        .unwrap();
    assert_eq!(seen.article.view_count, 0);
    assert!(app.store.view_events().unwrap().is_empty());
}

#[tokio::test]
async fn lesson_events_point_at_the_lesson() {
    let app = TestApp::new();
    let author = member(&app, "alice");
    let root = admin(&app, "root");
    let fixture = published_course(&app, &author, &root, None).await;

    app.services
        .course_queries
        .view_lesson(None, GetLessonQuery { id: fixture.free_lesson_id })
        .await
        .unwrap();

    let events = app.store.view_events().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].target.id(), fixture.free_lesson_id);
    assert!(matches!(events[0].target, ViewTarget::Lesson(_)));
    assert!(!events[0].not_enrolled_access);
}
