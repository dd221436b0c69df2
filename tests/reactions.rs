mod support;

use curricula_core::application::ApplicationError;
use curricula_core::application::commands::articles::AddArticleReactionCommand;
use curricula_core::application::commands::courses::AddCourseReactionCommand;
use curricula_core::domain::content::{MAX_REACTIONS_PER_AUTHOR, ReactionAction};
use support::{
    TestApp, admin, draft_course, fixed_now, member, published_article, published_course,
};

fn like(id: i64) -> AddArticleReactionCommand {
    AddArticleReactionCommand {
        id,
        action: ReactionAction::Like,
    }
}

#[tokio::test]
async fn fiftieth_reaction_is_refused() {
    let app = TestApp::new();
    let author = member(&app, "alice");
    let root = admin(&app, "root");
    let fan = member(&app, "fan");
    let id = published_article(&app, &author, &root, false).await;
    let commands = &app.services.article_commands;

    for round in 1..=MAX_REACTIONS_PER_AUTHOR {
        let reactions = commands.add_reaction(Some(&fan), like(id)).await.unwrap();
        assert_eq!(reactions.len(), round);
    }

    let err = commands.add_reaction(Some(&fan), like(id)).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(msg) if msg.contains("more than 50 reactions")));
}

#[tokio::test]
async fn the_bound_is_per_author() {
    let app = TestApp::new();
    let author = member(&app, "alice");
    let root = admin(&app, "root");
    let fan = member(&app, "fan");
    let other = member(&app, "other");
    let id = published_article(&app, &author, &root, false).await;
    let commands = &app.services.article_commands;

    for _ in 0..MAX_REACTIONS_PER_AUTHOR {
        commands.add_reaction(Some(&fan), like(id)).await.unwrap();
    }

    let reactions = commands
        .add_reaction(
            Some(&other),
            AddArticleReactionCommand {
                id,
                action: ReactionAction::Clap,
            },
        )
        .await
        .unwrap();
    assert_eq!(reactions.len(), MAX_REACTIONS_PER_AUTHOR + 1);
    let last = reactions.last().unwrap();
    assert_eq!(last.author_id, i64::from(other.id));
    assert_eq!(last.action, ReactionAction::Clap);
    assert_eq!(last.created_at, fixed_now());
}

#[tokio::test]
async fn anonymous_reactions_need_an_identity() {
    let app = TestApp::new();
    let author = member(&app, "alice");
    let root = admin(&app, "root");
    let id = published_article(&app, &author, &root, false).await;

    let err = app
        .services
        .article_commands
        .add_reaction(None, like(id))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn drafts_take_no_reactions() {
    let app = TestApp::new();
    let author = member(&app, "alice");
    let fixture = draft_course(&app, &author, None).await;

    let err = app
        .services
        .course_commands
        .add_reaction(
            Some(&author),
            AddCourseReactionCommand {
                id: fixture.course_id,
                action: ReactionAction::Fire,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_forbidden());
}

#[tokio::test]
async fn courses_collect_reactions() {
    let app = TestApp::new();
    let author = member(&app, "alice");
    let root = admin(&app, "root");
    let fan = member(&app, "fan");
    let fixture = published_course(&app, &author, &root, None).await;

    let reactions = app
        .services
        .course_commands
        .add_reaction(
            Some(&fan),
            AddCourseReactionCommand {
                id: fixture.course_id,
                action: ReactionAction::Love,
            },
        )
        .await
        .unwrap();
    assert_eq!(reactions.len(), 1);
    assert_eq!(reactions[0].action, ReactionAction::Love);
}

#[tokio::test]
async fn reacting_to_a_missing_item_is_not_found() {
    let app = TestApp::new();
    let fan = member(&app, "fan");

    let err = app
        .services
        .article_commands
        .add_reaction(Some(&fan), like(9_999))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn the_store_refuses_reactions_on_drafts_too() {
    use curricula_core::domain::content::Reaction;
    use curricula_core::domain::course::{CourseId, CourseReadRepository, CourseWriteRepository};
    use curricula_core::domain::errors::DomainError;

    let app = TestApp::new();
    let author = member(&app, "alice");
    let fixture = draft_course(&app, &author, None).await;
    let id = CourseId(fixture.course_id);
    let course = CourseReadRepository::find_by_id(&app.store, id)
        .await
        .unwrap()
        .unwrap();

    let reaction = Reaction {
        author_id: author.id,
        action: ReactionAction::Fire,
        created_at: fixed_now(),
    };
    let err = CourseWriteRepository::append_reaction(&app.store, id, course.version, reaction)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(msg) if msg.contains("published")));

    let after = CourseReadRepository::find_by_id(&app.store, id)
        .await
        .unwrap()
        .unwrap();
    assert!(after.reactions.is_empty());
    assert_eq!(after.version, course.version);
}
