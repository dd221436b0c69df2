// src/domain/course/entity.rs
use crate::domain::content::{ContentBody, ContentStatus, ContentTitle, Publication, ReactionLog};
use crate::domain::course::value_objects::{ChapterId, CourseId, LessonId, LessonType};
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// A course. Company ownership is not stored here; it is resolved from the
/// active company link each time it is needed.
#[derive(Debug, Clone)]
pub struct Course {
    pub id: CourseId,
    pub title: ContentTitle,
    pub description: ContentBody,
    pub author_id: UserId,
    pub publication: Publication,
    pub tags: BTreeSet<TagId>,
    pub reactions: ReactionLog,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_saved_at: DateTime<Utc>,
    pub version: i64,
}

impl Course {
    pub fn status(&self) -> ContentStatus {
        self.publication.status
    }

    pub fn set_content(
        &mut self,
        title: Option<ContentTitle>,
        description: Option<ContentBody>,
        now: DateTime<Utc>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        self.last_saved_at = now;
    }

    pub fn set_tags(&mut self, tags: BTreeSet<TagId>, now: DateTime<Utc>) {
        self.tags = tags;
        self.last_saved_at = now;
    }

    pub fn apply_status(
        &mut self,
        requested: ContentStatus,
        privileged: bool,
        now: DateTime<Utc>,
    ) -> ContentStatus {
        self.last_saved_at = now;
        self.publication.apply(requested, privileged, now)
    }
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: ContentTitle,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewCourse {
    pub fn into_course(self, id: CourseId) -> Course {
        Course {
            id,
            title: self.title,
            description: ContentBody::empty(),
            author_id: self.author_id,
            publication: Publication::draft(),
            tags: BTreeSet::new(),
            reactions: ReactionLog::default(),
            view_count: 0,
            created_at: self.created_at,
            last_saved_at: self.created_at,
            version: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Chapter {
    pub id: ChapterId,
    pub course_id: CourseId,
    pub title: ContentTitle,
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct NewChapter {
    pub course_id: CourseId,
    pub title: ContentTitle,
    pub position: i32,
}

/// A lesson has no publication state of its own; it follows its course.
#[derive(Debug, Clone)]
pub struct Lesson {
    pub id: LessonId,
    pub chapter_id: ChapterId,
    pub title: ContentTitle,
    pub content: ContentBody,
    pub free: bool,
    pub lesson_type: LessonType,
}

#[derive(Debug, Clone)]
pub struct NewLesson {
    pub chapter_id: ChapterId,
    pub title: ContentTitle,
    pub content: ContentBody,
    pub free: bool,
    pub lesson_type: LessonType,
}

impl NewLesson {
    pub fn into_lesson(self, id: LessonId) -> Lesson {
        Lesson {
            id,
            chapter_id: self.chapter_id,
            title: self.title,
            content: self.content,
            free: self.free,
            lesson_type: self.lesson_type,
        }
    }
}
