use super::CourseCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ChapterDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{content::ContentTitle, course::NewChapter},
};

pub struct AddChapterCommand {
    pub course_id: i64,
    pub title: String,
}

impl CourseCommandService {
    /// Appends a chapter after the existing ones.
    pub async fn add_chapter(
        &self,
        actor: &AuthenticatedUser,
        command: AddChapterCommand,
    ) -> ApplicationResult<ChapterDto> {
        let course = self.catalog.course(command.course_id).await?;
        self.editable(actor, &course).await?;

        let title = ContentTitle::new(command.title)?;
        let existing = self.catalog.chapters_of(course.id).await?;
        let position = i32::try_from(existing.len() + 1)
            .map_err(|_| ApplicationError::validation("too many chapters"))?;

        let chapter = self
            .chapters
            .insert(NewChapter {
                course_id: course.id,
                title,
                position,
            })
            .await?;
        Ok(chapter.into())
    }
}
