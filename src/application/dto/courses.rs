use crate::application::dto::AccessLevel;
use crate::domain::company::Ownership;
use crate::domain::content::{ContentStatus, Disclosure};
use crate::domain::course::{Chapter, Course, Lesson, LessonType};
use crate::domain::enrollment::Enrollment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author_id: i64,
    /// Owning company, `None` for platform courses.
    #[serde(default)]
    pub company_id: Option<i64>,
    pub status: ContentStatus,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_published_at: Option<DateTime<Utc>>,
    pub tags: Vec<i64>,
    pub reaction_count: usize,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_saved_at: DateTime<Utc>,
}

impl CourseDto {
    pub fn new(course: Course, ownership: Ownership) -> Self {
        Self {
            id: course.id.into(),
            title: course.title.into_inner(),
            description: course.description.into_inner(),
            author_id: course.author_id.into(),
            company_id: ownership.company().map(i64::from),
            status: course.publication.status,
            published_at: course.publication.published_at,
            last_published_at: course.publication.last_published_at,
            tags: course.tags.into_iter().map(i64::from).collect(),
            reaction_count: course.reactions.len(),
            view_count: course.view_count,
            created_at: course.created_at,
            last_saved_at: course.last_saved_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisclosedCourseDto {
    #[serde(flatten)]
    pub course: CourseDto,
    pub chapters: Vec<ChapterDto>,
    pub access: AccessLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterDto {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub position: i32,
}

impl From<Chapter> for ChapterDto {
    fn from(chapter: Chapter) -> Self {
        Self {
            id: chapter.id.into(),
            course_id: chapter.course_id.into(),
            title: chapter.title.into_inner(),
            position: chapter.position,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonDto {
    pub id: i64,
    pub chapter_id: i64,
    pub course_id: i64,
    pub title: String,
    pub content: String,
    pub free: bool,
    pub lesson_type: LessonType,
    pub access: AccessLevel,
    /// Teaser served to a viewer without an account.
    pub not_enrolled_access: bool,
}

impl LessonDto {
    /// Full view, used for editors and write paths.
    pub fn full(lesson: Lesson, course_id: i64) -> Self {
        Self {
            id: lesson.id.into(),
            chapter_id: lesson.chapter_id.into(),
            course_id,
            title: lesson.title.into_inner(),
            content: lesson.content.into_inner(),
            free: lesson.free,
            lesson_type: lesson.lesson_type,
            access: AccessLevel::Full,
            not_enrolled_access: false,
        }
    }

    /// `None` when the disclosure denies access.
    pub fn disclose(
        lesson: Lesson,
        course_id: i64,
        disclosure: Disclosure,
        anonymous: bool,
    ) -> Option<Self> {
        let mut dto = Self::full(lesson, course_id);
        match disclosure {
            Disclosure::Full => {}
            Disclosure::Teaser { text, .. } => {
                dto.content = text;
                dto.access = AccessLevel::Teaser;
                dto.not_enrolled_access = anonymous;
            }
            Disclosure::Denied(_) => return None,
        }
        Some(dto)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentDto {
    pub user_id: i64,
    pub course_id: i64,
    pub active: bool,
    pub completed_lessons: Vec<i64>,
}

impl From<Enrollment> for EnrollmentDto {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            user_id: enrollment.user_id.into(),
            course_id: enrollment.course_id.into(),
            active: enrollment.active,
            completed_lessons: enrollment
                .completed_lessons
                .into_iter()
                .map(i64::from)
                .collect(),
        }
    }
}
