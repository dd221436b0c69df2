use super::CourseQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, LessonDto},
        error::{ApplicationError, ApplicationResult},
        ports::telemetry::{ViewEvent, ViewTarget},
        services::views::record_best_effort,
    },
    domain::content::{DenialReason, Disclosure, DisclosureRequest, TeaserRatio},
};

pub struct GetLessonQuery {
    pub id: i64,
}

impl CourseQueryService {
    /// Lesson as `viewer` may see it: full, a quarter-length teaser, or an
    /// error. Company lessons are never previewed anonymously.
    pub async fn view_lesson(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: GetLessonQuery,
    ) -> ApplicationResult<LessonDto> {
        let (lesson, course) = self.catalog.lesson_with_course(query.id).await?;
        let access = self.access.course_access(viewer, &course).await?;
        let published = course.status().is_published();

        let enrolled = match viewer {
            Some(viewer) if published && !lesson.free => self
                .enrollments
                .active_enrollment(viewer.id, course.id)
                .await?
                .is_some(),
            _ => false,
        };

        let request = DisclosureRequest {
            published,
            anonymous: viewer.is_none(),
            full_reader: access.can_edit(),
            gated: !lesson.free,
            entitled: enrolled || access.is_company_member() || access.matrix().has_pro_plan(),
            deny_anonymous: access.ownership().is_company(),
            ratio: TeaserRatio::Quarter,
        };
        let disclosure = request.evaluate(lesson.content.as_str());
        match disclosure {
            Disclosure::Denied(DenialReason::Unpublished) => {
                return Err(ApplicationError::not_found("lesson not found"));
            }
            Disclosure::Denied(DenialReason::IdentityRequired) => {
                return Err(ApplicationError::unauthorized(
                    "sign in to view company lessons",
                ));
            }
            Disclosure::Full | Disclosure::Teaser { .. } => {}
        }

        let lesson_id = lesson.id;
        let track = published && !access.is_author();
        let dto = LessonDto::disclose(lesson, course.id.into(), disclosure, viewer.is_none())
            .ok_or_else(|| ApplicationError::not_found("lesson not found"))?;

        if track {
            let event = ViewEvent::new(
                ViewTarget::Lesson(lesson_id),
                viewer.map(|v| v.id),
                self.clock.now(),
            )
            .with_not_enrolled_access(dto.not_enrolled_access);
            record_best_effort(self.views.as_ref(), event).await;
        }
        Ok(dto)
    }
}
