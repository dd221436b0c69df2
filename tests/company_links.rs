mod support;

use curricula_core::application::commands::companies::{
    AddMemberCommand, DeleteCourseLinkCommand, LinkCourseCommand, RemoveMemberCommand,
    SuspendCourseLinkCommand,
};
use curricula_core::application::commands::courses::SaveCourseCommand;
use curricula_core::application::queries::companies::ListCompanyCoursesQuery;
use curricula_core::application::queries::courses::GetCourseByIdQuery;
use curricula_core::domain::company::CompanyRole;
use support::{TestApp, admin, company, draft_course, fixed_now, join, member};

#[tokio::test]
async fn linking_twice_to_the_same_company_is_a_no_op() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let author = member(&app, "alice");
    let boss = member(&app, "bea");
    join(&app, acme, &boss, CompanyRole::Admin).await;
    let fixture = draft_course(&app, &author, None).await;
    let commands = &app.services.company_commands;

    let link = LinkCourseCommand {
        course_id: fixture.course_id,
        company_id: acme,
    };
    let first = commands.link_course(&boss, link).await.unwrap();
    assert!(first.active);
    assert_eq!(first.linked_at, fixed_now());

    let again = commands
        .link_course(
            &boss,
            LinkCourseCommand {
                course_id: fixture.course_id,
                company_id: acme,
            },
        )
        .await
        .unwrap();
    assert_eq!(again.company_id, first.company_id);
    assert_eq!(again.linked_at, first.linked_at);

    let course = app
        .services
        .course_queries
        .view_course(Some(&boss), GetCourseByIdQuery { id: fixture.course_id })
        .await
        .unwrap();
    assert_eq!(course.course.company_id, Some(acme));
}

#[tokio::test]
async fn a_course_belongs_to_one_company_at_a_time() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let globex = company(&app, "Globex");
    let root = admin(&app, "root");
    let editor = member(&app, "eve");
    join(&app, acme, &editor, CompanyRole::Editor).await;
    let fixture = draft_course(&app, &editor, Some(acme)).await;

    let err = app
        .services
        .company_commands
        .link_course(
            &root,
            LinkCourseCommand {
                course_id: fixture.course_id,
                company_id: globex,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        curricula_core::application::ApplicationError::Conflict(_)
    ));
}

#[tokio::test]
async fn viewers_cannot_link_courses() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let author = member(&app, "alice");
    join(&app, acme, &author, CompanyRole::Viewer).await;
    let fixture = draft_course(&app, &author, None).await;

    let err = app
        .services
        .company_commands
        .link_course(
            &author,
            LinkCourseCommand {
                course_id: fixture.course_id,
                company_id: acme,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_forbidden());
}

#[tokio::test]
async fn suspending_returns_the_course_to_the_platform() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let author = member(&app, "alice");
    let boss = member(&app, "bea");
    let editor = member(&app, "eve");
    join(&app, acme, &boss, CompanyRole::Admin).await;
    join(&app, acme, &editor, CompanyRole::Editor).await;
    let fixture = draft_course(&app, &author, Some(acme)).await;
    let commands = &app.services.company_commands;

    let err = commands
        .suspend_course_link(
            &editor,
            SuspendCourseLinkCommand {
                course_id: fixture.course_id,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_forbidden());

    let later = app.clock.advance(chrono::Duration::minutes(5));
    let suspended = commands
        .suspend_course_link(
            &boss,
            SuspendCourseLinkCommand {
                course_id: fixture.course_id,
            },
        )
        .await
        .unwrap();
    assert!(!suspended.active);
    assert_eq!(suspended.suspended_at, Some(later));

    let err = app
        .services
        .course_commands
        .save_course(
            &boss,
            SaveCourseCommand {
                title: Some("Ours".into()),
                ..SaveCourseCommand::new(fixture.course_id)
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_forbidden());

    let course = app
        .services
        .course_queries
        .view_course(Some(&author), GetCourseByIdQuery { id: fixture.course_id })
        .await
        .unwrap();
    assert_eq!(course.course.company_id, None);

    let err = commands
        .suspend_course_link(
            &boss,
            SuspendCourseLinkCommand {
                course_id: fixture.course_id,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn suspended_course_can_be_relinked() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let globex = company(&app, "Globex");
    let author = member(&app, "alice");
    let root = admin(&app, "root");
    let fixture = draft_course(&app, &author, None).await;
    let commands = &app.services.company_commands;

    commands
        .link_course(
            &root,
            LinkCourseCommand {
                course_id: fixture.course_id,
                company_id: acme,
            },
        )
        .await
        .unwrap();
    commands
        .suspend_course_link(
            &root,
            SuspendCourseLinkCommand {
                course_id: fixture.course_id,
            },
        )
        .await
        .unwrap();
    let relinked = commands
        .link_course(
            &root,
            LinkCourseCommand {
                course_id: fixture.course_id,
                company_id: globex,
            },
        )
        .await
        .unwrap();
    assert_eq!(relinked.company_id, globex);
}

#[tokio::test]
async fn course_list_is_for_members_only() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let editor = member(&app, "eve");
    let staff = member(&app, "stan");
    let outsider = member(&app, "olga");
    let root = admin(&app, "root");
    join(&app, acme, &editor, CompanyRole::Editor).await;
    join(&app, acme, &staff, CompanyRole::Viewer).await;
    let first = draft_course(&app, &editor, Some(acme)).await;
    let second = draft_course(&app, &editor, Some(acme)).await;
    let queries = &app.services.company_queries;

    for viewer in [&staff, &root] {
        let links = queries
            .list_course_links(viewer, ListCompanyCoursesQuery { company_id: acme })
            .await
            .unwrap();
        let ids: Vec<i64> = links.iter().map(|link| link.course_id).collect();
        assert_eq!(ids, vec![first.course_id, second.course_id]);
    }

    let err = queries
        .list_course_links(&outsider, ListCompanyCoursesQuery { company_id: acme })
        .await
        .unwrap_err();
    assert!(err.is_forbidden());
}

#[tokio::test]
async fn company_admins_manage_members() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let boss = member(&app, "bea");
    let newcomer = member(&app, "nia");
    join(&app, acme, &boss, CompanyRole::Admin).await;
    let commands = &app.services.company_commands;

    let added = commands
        .add_member(
            &boss,
            AddMemberCommand {
                company_id: acme,
                user_id: newcomer.id.into(),
                role: CompanyRole::Viewer,
            },
        )
        .await
        .unwrap();
    assert_eq!(added.role, CompanyRole::Viewer);
    assert!(added.active);

    let promoted = commands
        .add_member(
            &boss,
            AddMemberCommand {
                company_id: acme,
                user_id: newcomer.id.into(),
                role: CompanyRole::Editor,
            },
        )
        .await
        .unwrap();
    assert_eq!(promoted.role, CompanyRole::Editor);

    let err = commands
        .add_member(
            &newcomer,
            AddMemberCommand {
                company_id: acme,
                user_id: boss.id.into(),
                role: CompanyRole::Viewer,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_forbidden());

    commands
        .remove_member(
            &boss,
            RemoveMemberCommand {
                company_id: acme,
                user_id: newcomer.id.into(),
            },
        )
        .await
        .unwrap();
    let err = commands
        .remove_member(
            &boss,
            RemoveMemberCommand {
                company_id: acme,
                user_id: newcomer.id.into(),
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn adding_an_unknown_user_is_not_found() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let root = admin(&app, "root");

    let err = app
        .services
        .company_commands
        .add_member(
            &root,
            AddMemberCommand {
                company_id: acme,
                user_id: 9_999,
                role: CompanyRole::Viewer,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn removed_members_lose_their_rights() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let boss = member(&app, "bea");
    let editor = member(&app, "eve");
    let author = member(&app, "alice");
    join(&app, acme, &boss, CompanyRole::Admin).await;
    join(&app, acme, &editor, CompanyRole::Editor).await;
    let fixture = draft_course(&app, &author, Some(acme)).await;

    app.services
        .company_commands
        .remove_member(
            &boss,
            RemoveMemberCommand {
                company_id: acme,
                user_id: editor.id.into(),
            },
        )
        .await
        .unwrap();

    let err = app
        .services
        .course_commands
        .save_course(
            &editor,
            SaveCourseCommand {
                title: Some("Still mine".into()),
                ..SaveCourseCommand::new(fixture.course_id)
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_forbidden());
}

#[tokio::test]
async fn unlinked_courses_need_a_platform_admin_to_clear_links() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let author = member(&app, "alice");
    let boss = member(&app, "bea");
    let root = admin(&app, "root");
    join(&app, acme, &boss, CompanyRole::Admin).await;
    let fixture = draft_course(&app, &author, Some(acme)).await;
    let commands = &app.services.company_commands;

    commands
        .suspend_course_link(
            &boss,
            SuspendCourseLinkCommand {
                course_id: fixture.course_id,
            },
        )
        .await
        .unwrap();

    let err = commands
        .delete_course_link(
            &boss,
            DeleteCourseLinkCommand {
                course_id: fixture.course_id,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_forbidden());

    commands
        .delete_course_link(
            &root,
            DeleteCourseLinkCommand {
                course_id: fixture.course_id,
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn company_admin_clears_an_active_link() {
    let app = TestApp::new();
    let acme = company(&app, "Acme");
    let editor = member(&app, "eve");
    let boss = member(&app, "bea");
    join(&app, acme, &editor, CompanyRole::Editor).await;
    join(&app, acme, &boss, CompanyRole::Admin).await;
    let fixture = draft_course(&app, &editor, Some(acme)).await;
    let commands = &app.services.company_commands;

    let err = commands
        .delete_course_link(
            &editor,
            DeleteCourseLinkCommand {
                course_id: fixture.course_id,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_forbidden());

    commands
        .delete_course_link(
            &boss,
            DeleteCourseLinkCommand {
                course_id: fixture.course_id,
            },
        )
        .await
        .unwrap();

    let links = app
        .services
        .company_queries
        .list_course_links(&boss, ListCompanyCoursesQuery { company_id: acme })
        .await
        .unwrap();
    assert!(links.is_empty());
}
