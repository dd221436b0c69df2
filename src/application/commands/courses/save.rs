use super::CourseCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CourseDto},
        error::ApplicationResult,
    },
    domain::content::{ContentBody, ContentStatus, ContentTitle},
};

pub struct SaveCourseCommand {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<i64>>,
    pub status: Option<ContentStatus>,
}

impl SaveCourseCommand {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: None,
            description: None,
            tags: None,
            status: None,
        }
    }
}

impl CourseCommandService {
    pub async fn save_course(
        &self,
        actor: &AuthenticatedUser,
        command: SaveCourseCommand,
    ) -> ApplicationResult<CourseDto> {
        let mut course = self.catalog.course(command.id).await?;
        let access = self.editable(actor, &course).await?;

        let title = command.title.map(ContentTitle::new).transpose()?;
        let description = command.description.map(ContentBody::new);
        let tags = match command.tags {
            Some(raw) => Some(self.tags.resolve(&raw).await?),
            None => None,
        };

        let now = self.clock.now();
        let previous = course.status();
        course.set_content(title, description, now);
        if let Some(tags) = tags {
            course.set_tags(tags, now);
        }
        let requested = command.status.unwrap_or(previous);
        let next = course.apply_status(requested, access.is_privileged(), now);

        let updated = self.write_repo.update(&course).await?;
        if next != previous {
            tracing::info!(
                course_id = %updated.id,
                from = %previous,
                to = %next,
                requested = %requested,
                company_owned = access.ownership().is_company(),
                "course status changed"
            );
        }
        Ok(CourseDto::new(updated, access.ownership()))
    }
}
