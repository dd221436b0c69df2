use super::CourseQueryService;
use crate::{
    application::{
        dto::{AccessLevel, AuthenticatedUser, ChapterDto, CourseDto, DisclosedCourseDto},
        error::{ApplicationError, ApplicationResult},
        ports::telemetry::{ViewEvent, ViewTarget},
        services::views::record_best_effort,
    },
    domain::content::{DisclosureRequest, TeaserRatio},
};

pub struct GetCourseByIdQuery {
    pub id: i64,
}

impl CourseQueryService {
    /// Course overview with its chapter list. The description itself is
    /// never gated; lessons are disclosed one by one.
    pub async fn view_course(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: GetCourseByIdQuery,
    ) -> ApplicationResult<DisclosedCourseDto> {
        let course = self.catalog.course(query.id).await?;
        let access = self.access.course_access(viewer, &course).await?;

        let request = DisclosureRequest {
            published: course.status().is_published(),
            anonymous: viewer.is_none(),
            full_reader: access.can_edit(),
            gated: false,
            entitled: false,
            deny_anonymous: false,
            ratio: TeaserRatio::Half,
        };
        if request.evaluate(course.description.as_str()).is_denied() {
            return Err(ApplicationError::not_found("course not found"));
        }

        let chapters = self
            .catalog
            .chapters_of(course.id)
            .await?
            .into_iter()
            .map(ChapterDto::from)
            .collect();

        if request.published && !access.is_author() {
            let event = ViewEvent::new(
                ViewTarget::Course(course.id),
                viewer.map(|v| v.id),
                self.clock.now(),
            );
            record_best_effort(self.views.as_ref(), event).await;
        }

        Ok(DisclosedCourseDto {
            course: CourseDto::new(course, access.ownership()),
            chapters,
            access: AccessLevel::Full,
        })
    }
}
