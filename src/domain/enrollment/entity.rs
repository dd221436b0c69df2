// src/domain/enrollment/entity.rs
use crate::domain::course::{CourseId, LessonId};
use crate::domain::user::UserId;
use std::collections::BTreeSet;

/// A user's subscription to a course. Only active enrollments unlock lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub active: bool,
    pub completed_lessons: BTreeSet<LessonId>,
}

impl Enrollment {
    pub fn new(user_id: UserId, course_id: CourseId) -> Self {
        Self {
            user_id,
            course_id,
            active: true,
            completed_lessons: BTreeSet::new(),
        }
    }

    /// Returns `true` if the lesson was not completed before.
    pub fn complete(&mut self, lesson_id: LessonId) -> bool {
        self.completed_lessons.insert(lesson_id)
    }
}
