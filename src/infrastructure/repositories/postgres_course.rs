// src/infrastructure/repositories/postgres_course.rs
use super::content::{self, ContentTable};
use super::map_sqlx;
use super::postgres_company::insert_link;
use crate::domain::company::{CompanyCourseLink, CompanyId};
use crate::domain::content::{ContentBody, ContentTitle, Publication, Reaction, ReactionLog};
use crate::domain::course::{
    Chapter, ChapterId, ChapterRepository, Course, CourseId, CourseReadRepository,
    CourseWriteRepository, Lesson, LessonId, LessonRepository, NewChapter, NewCourse, NewLesson,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor, PgPool};
use std::collections::BTreeSet;

const COURSE_COLUMNS: &str = "id, title, description, author_id, status, published_at, \
     last_published_at, view_count, created_at, last_saved_at, version";
const LESSON_COLUMNS: &str = "id, chapter_id, title, content, free, lesson_type";

/// Courses, chapters and lessons share one pool-backed store.
#[derive(Clone)]
pub struct PostgresCourseRepository {
    pool: PgPool,
}

impl PostgresCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load(&self, id: i64) -> DomainResult<Option<Course>> {
        let row = sqlx::query_as::<_, CourseRow>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let tags = content::load_tags(&self.pool, ContentTable::Courses, id).await?;
        let reactions = content::load_reactions(&self.pool, ContentTable::Courses, id).await?;
        row.into_course(tags, reactions).map(Some)
    }

    async fn reload(&self, id: i64) -> DomainResult<Course> {
        self.load(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("course not found".into()))
    }
}

async fn insert_course<'e>(exec: impl PgExecutor<'e>, course: NewCourse) -> DomainResult<Course> {
    let NewCourse {
        title,
        author_id,
        created_at,
    } = course;

    let row = sqlx::query_as::<_, CourseRow>(&format!(
        "INSERT INTO courses (title, author_id, status, created_at, last_saved_at)
         VALUES ($1, $2, 'draft', $3, $3)
         RETURNING {COURSE_COLUMNS}"
    ))
    .bind(title.as_str())
    .bind(i64::from(author_id))
    .bind(created_at)
    .fetch_one(exec)
    .await
    .map_err(map_sqlx)?;

    row.into_course(BTreeSet::new(), ReactionLog::default())
}

#[derive(Debug, FromRow)]
struct CourseRow {
    id: i64,
    title: String,
    description: String,
    author_id: i64,
    status: String,
    published_at: Option<DateTime<Utc>>,
    last_published_at: Option<DateTime<Utc>>,
    view_count: i64,
    created_at: DateTime<Utc>,
    last_saved_at: DateTime<Utc>,
    version: i64,
}

impl CourseRow {
    fn into_course(self, tags: BTreeSet<TagId>, reactions: ReactionLog) -> DomainResult<Course> {
        Ok(Course {
            id: CourseId::new(self.id)?,
            title: ContentTitle::new(self.title)?,
            description: ContentBody::new(self.description),
            author_id: UserId::new(self.author_id)?,
            publication: Publication {
                status: self.status.parse()?,
                published_at: self.published_at,
                last_published_at: self.last_published_at,
            },
            tags,
            reactions,
            view_count: self.view_count,
            created_at: self.created_at,
            last_saved_at: self.last_saved_at,
            version: self.version,
        })
    }
}

#[derive(Debug, FromRow)]
struct ChapterRow {
    id: i64,
    course_id: i64,
    title: String,
    position: i32,
}

impl TryFrom<ChapterRow> for Chapter {
    type Error = DomainError;

    fn try_from(row: ChapterRow) -> Result<Self, Self::Error> {
        Ok(Chapter {
            id: ChapterId::new(row.id)?,
            course_id: CourseId::new(row.course_id)?,
            title: ContentTitle::new(row.title)?,
            position: row.position,
        })
    }
}

#[derive(Debug, FromRow)]
struct LessonRow {
    id: i64,
    chapter_id: i64,
    title: String,
    content: String,
    free: bool,
    lesson_type: String,
}

impl TryFrom<LessonRow> for Lesson {
    type Error = DomainError;

    fn try_from(row: LessonRow) -> Result<Self, Self::Error> {
        Ok(Lesson {
            id: LessonId::new(row.id)?,
            chapter_id: ChapterId::new(row.chapter_id)?,
            title: ContentTitle::new(row.title)?,
            content: ContentBody::new(row.content),
            free: row.free,
            lesson_type: row.lesson_type.parse()?,
        })
    }
}

#[async_trait]
impl CourseWriteRepository for PostgresCourseRepository {
    async fn insert(&self, course: NewCourse) -> DomainResult<Course> {
        insert_course(&self.pool, course).await
    }

    async fn insert_linked(
        &self,
        course: NewCourse,
        company_id: CompanyId,
    ) -> DomainResult<Course> {
        let linked_at = course.created_at;
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let course = insert_course(&mut *tx, course).await?;
        let link = CompanyCourseLink::new(company_id, course.id, linked_at);
        insert_link(&mut *tx, &link).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(course)
    }

    async fn update(&self, course: &Course) -> DomainResult<Course> {
        let id = i64::from(course.id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let updated = sqlx::query_scalar::<_, i64>(
            "UPDATE courses SET
                title = $3, description = $4, status = $5,
                published_at = $6, last_published_at = $7, last_saved_at = $8,
                version = version + 1
             WHERE id = $1 AND version = $2
             RETURNING version",
        )
        .bind(id)
        .bind(course.version)
        .bind(course.title.as_str())
        .bind(course.description.as_str())
        .bind(course.publication.status.as_str())
        .bind(course.publication.published_at)
        .bind(course.publication.last_published_at)
        .bind(course.last_saved_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if updated.is_none() {
            return Err(content::stale_or_missing(&mut *tx, ContentTable::Courses, id).await);
        }

        content::clear_tags(&mut *tx, ContentTable::Courses, id).await?;
        content::insert_tags(&mut *tx, ContentTable::Courses, id, &course.tags).await?;
        tx.commit().await.map_err(map_sqlx)?;

        self.reload(id).await
    }

    async fn delete(&self, id: CourseId) -> DomainResult<()> {
        let id = i64::from(id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        // chapters, lessons, tags and links go with the row via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("course not found".into()));
        }
        content::delete_reactions(&mut *tx, ContentTable::Courses, id).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    async fn append_reaction(
        &self,
        id: CourseId,
        expected_version: i64,
        reaction: Reaction,
    ) -> DomainResult<Course> {
        let id = i64::from(id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let bumped = sqlx::query_scalar::<_, i64>(ContentTable::Courses.bump_version())
            .bind(id)
            .bind(expected_version)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if bumped.is_none() {
            return Err(content::stale_or_missing(&mut *tx, ContentTable::Courses, id).await);
        }

        content::insert_reaction(&mut *tx, ContentTable::Courses, id, &reaction).await?;
        tx.commit().await.map_err(map_sqlx)?;

        self.reload(id).await
    }
}

#[async_trait]
impl CourseReadRepository for PostgresCourseRepository {
    async fn find_by_id(&self, id: CourseId) -> DomainResult<Option<Course>> {
        self.load(i64::from(id)).await
    }
}

#[async_trait]
impl ChapterRepository for PostgresCourseRepository {
    async fn find_by_id(&self, id: ChapterId) -> DomainResult<Option<Chapter>> {
        let row = sqlx::query_as::<_, ChapterRow>(
            "SELECT id, course_id, title, position FROM chapters WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(Chapter::try_from).transpose()
    }

    async fn insert(&self, chapter: NewChapter) -> DomainResult<Chapter> {
        let row = sqlx::query_as::<_, ChapterRow>(
            "INSERT INTO chapters (course_id, title, position)
             VALUES ($1, $2, $3)
             RETURNING id, course_id, title, position",
        )
        .bind(i64::from(chapter.course_id))
        .bind(chapter.title.as_str())
        .bind(chapter.position)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Chapter::try_from(row)
    }

    async fn list_by_course(&self, course_id: CourseId) -> DomainResult<Vec<Chapter>> {
        let rows = sqlx::query_as::<_, ChapterRow>(
            "SELECT id, course_id, title, position FROM chapters
             WHERE course_id = $1
             ORDER BY position, id",
        )
        .bind(i64::from(course_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(Chapter::try_from).collect()
    }
}

#[async_trait]
impl LessonRepository for PostgresCourseRepository {
    async fn find_by_id(&self, id: LessonId) -> DomainResult<Option<Lesson>> {
        let row = sqlx::query_as::<_, LessonRow>(&format!(
            "SELECT {LESSON_COLUMNS} FROM lessons WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(Lesson::try_from).transpose()
    }

    async fn insert(&self, lesson: NewLesson) -> DomainResult<Lesson> {
        let row = sqlx::query_as::<_, LessonRow>(&format!(
            "INSERT INTO lessons (chapter_id, title, content, free, lesson_type)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {LESSON_COLUMNS}"
        ))
        .bind(i64::from(lesson.chapter_id))
        .bind(lesson.title.as_str())
        .bind(lesson.content.as_str())
        .bind(lesson.free)
        .bind(lesson.lesson_type.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Lesson::try_from(row)
    }

    async fn update(&self, lesson: &Lesson) -> DomainResult<Lesson> {
        let row = sqlx::query_as::<_, LessonRow>(&format!(
            "UPDATE lessons SET chapter_id = $2, title = $3, content = $4, free = $5, lesson_type = $6
             WHERE id = $1
             RETURNING {LESSON_COLUMNS}"
        ))
        .bind(i64::from(lesson.id))
        .bind(i64::from(lesson.chapter_id))
        .bind(lesson.title.as_str())
        .bind(lesson.content.as_str())
        .bind(lesson.free)
        .bind(lesson.lesson_type.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.ok_or_else(|| DomainError::NotFound("lesson not found".into()))
            .and_then(Lesson::try_from)
    }

    async fn delete(&self, id: LessonId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("lesson not found".into()));
        }
        Ok(())
    }
}
