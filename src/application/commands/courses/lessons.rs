use super::CourseCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, LessonDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{ContentBody, ContentTitle},
        course::{LessonType, NewLesson},
    },
};

/// Creates a lesson when `id` is `None`, otherwise rewrites it. A lesson may
/// move between chapters of the same course only.
pub struct SaveLessonCommand {
    pub id: Option<i64>,
    pub chapter_id: i64,
    pub title: String,
    pub content: String,
    pub free: bool,
    pub lesson_type: LessonType,
}

pub struct DeleteLessonCommand {
    pub id: i64,
}

impl CourseCommandService {
    pub async fn save_lesson(
        &self,
        actor: &AuthenticatedUser,
        command: SaveLessonCommand,
    ) -> ApplicationResult<LessonDto> {
        let (chapter, course) = self.catalog.chapter_with_course(command.chapter_id).await?;
        self.editable(actor, &course).await?;

        let title = ContentTitle::new(command.title)?;
        let content = ContentBody::new(command.content);

        let saved = match command.id {
            None => {
                self.lessons
                    .insert(NewLesson {
                        chapter_id: chapter.id,
                        title,
                        content,
                        free: command.free,
                        lesson_type: command.lesson_type,
                    })
                    .await?
            }
            Some(raw) => {
                let (mut lesson, current_course) = self.catalog.lesson_with_course(raw).await?;
                if current_course.id != course.id {
                    return Err(ApplicationError::validation(
                        "lesson cannot move to another course",
                    ));
                }
                lesson.chapter_id = chapter.id;
                lesson.title = title;
                lesson.content = content;
                lesson.free = command.free;
                lesson.lesson_type = command.lesson_type;
                self.lessons.update(&lesson).await?
            }
        };

        tracing::info!(lesson_id = %saved.id, course_id = %course.id, "lesson saved");
        Ok(LessonDto::full(saved, course.id.into()))
    }

    pub async fn delete_lesson(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteLessonCommand,
    ) -> ApplicationResult<()> {
        let (lesson, course) = self.catalog.lesson_with_course(command.id).await?;
        self.editable(actor, &course).await?;

        self.lessons.delete(lesson.id).await?;
        tracing::info!(lesson_id = %lesson.id, course_id = %course.id, "lesson deleted");
        Ok(())
    }
}
