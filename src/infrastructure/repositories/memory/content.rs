// src/infrastructure/repositories/memory/content.rs
use super::{InMemoryStore, State};
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use crate::domain::company::{CompanyCourseLink, CompanyId};
use crate::domain::content::Reaction;
use crate::domain::course::{
    Chapter, ChapterId, ChapterRepository, Course, CourseId, CourseReadRepository,
    CourseWriteRepository, Lesson, LessonId, LessonRepository, NewChapter, NewCourse, NewLesson,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;

fn require_author(state: &State, author_id: UserId) -> DomainResult<()> {
    if state.users.contains_key(&author_id) {
        Ok(())
    } else {
        Err(DomainError::NotFound("author not found".into()))
    }
}

/// Compares the caller's version with the stored one.
fn check_version(kind: &str, stored: Option<i64>, expected: i64) -> DomainResult<()> {
    match stored {
        None => Err(DomainError::NotFound(format!("{kind} not found"))),
        Some(current) if current != expected => Err(DomainError::Conflict(format!(
            "{kind} was modified concurrently, please retry"
        ))),
        Some(_) => Ok(()),
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.lock()?;
        require_author(&state, article.author_id)?;
        let id = ArticleId::new(state.next_id())?;
        let article = article.into_article(id);
        state.articles.insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let mut state = self.lock()?;
        let stored = state.articles.get(&article.id).map(|a| a.version);
        check_version("article", stored, article.version)?;

        let mut next = article.clone();
        next.version += 1;
        // counters and reactions are owned by the store
        if let Some(current) = state.articles.get(&article.id) {
            next.view_count = current.view_count;
            next.reactions = current.reactions.clone();
        }
        state.articles.insert(next.id, next.clone());
        Ok(next)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.lock()?;
        state
            .articles
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn append_reaction(
        &self,
        id: ArticleId,
        expected_version: i64,
        reaction: Reaction,
    ) -> DomainResult<Article> {
        let mut state = self.lock()?;
        let stored = state.articles.get(&id).map(|a| a.version);
        check_version("article", stored, expected_version)?;

        let article = state
            .articles
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        let status = article.status();
        article
            .reactions
            .try_push(status, reaction)
            .map_err(|rejected| DomainError::Conflict(rejected.to_string()))?;
        article.version += 1;
        Ok(article.clone())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.lock()?.articles.get(&id).cloned())
    }
}

#[async_trait]
impl CourseWriteRepository for InMemoryStore {
    async fn insert(&self, course: NewCourse) -> DomainResult<Course> {
        let mut state = self.lock()?;
        require_author(&state, course.author_id)?;
        let id = CourseId::new(state.next_id())?;
        let course = course.into_course(id);
        state.courses.insert(id, course.clone());
        Ok(course)
    }

    async fn insert_linked(
        &self,
        course: NewCourse,
        company_id: CompanyId,
    ) -> DomainResult<Course> {
        let mut state = self.lock()?;
        require_author(&state, course.author_id)?;
        if !state.companies.contains_key(&company_id) {
            return Err(DomainError::NotFound("company not found".into()));
        }
        let id = CourseId::new(state.next_id())?;
        let course = course.into_course(id);
        state
            .course_links
            .push(CompanyCourseLink::new(company_id, id, course.created_at));
        state.courses.insert(id, course.clone());
        Ok(course)
    }

    async fn update(&self, course: &Course) -> DomainResult<Course> {
        let mut state = self.lock()?;
        let stored = state.courses.get(&course.id).map(|c| c.version);
        check_version("course", stored, course.version)?;

        let mut next = course.clone();
        next.version += 1;
        if let Some(current) = state.courses.get(&course.id) {
            next.view_count = current.view_count;
            next.reactions = current.reactions.clone();
        }
        state.courses.insert(next.id, next.clone());
        Ok(next)
    }

    async fn delete(&self, id: CourseId) -> DomainResult<()> {
        let mut state = self.lock()?;
        if state.courses.remove(&id).is_none() {
            return Err(DomainError::NotFound("course not found".into()));
        }

        let chapters: Vec<ChapterId> = state
            .chapters
            .values()
            .filter(|chapter| chapter.course_id == id)
            .map(|chapter| chapter.id)
            .collect();
        state.chapters.retain(|_, chapter| chapter.course_id != id);
        state
            .lessons
            .retain(|_, lesson| !chapters.contains(&lesson.chapter_id));
        state.course_links.retain(|link| link.course_id != id);
        state
            .enrollments
            .retain(|(_, course_id), _| *course_id != id);
        Ok(())
    }

    async fn append_reaction(
        &self,
        id: CourseId,
        expected_version: i64,
        reaction: Reaction,
    ) -> DomainResult<Course> {
        let mut state = self.lock()?;
        let stored = state.courses.get(&id).map(|c| c.version);
        check_version("course", stored, expected_version)?;

        let course = state
            .courses
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("course not found".into()))?;
        let status = course.status();
        course
            .reactions
            .try_push(status, reaction)
            .map_err(|rejected| DomainError::Conflict(rejected.to_string()))?;
        course.version += 1;
        Ok(course.clone())
    }
}

#[async_trait]
impl CourseReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: CourseId) -> DomainResult<Option<Course>> {
        Ok(self.lock()?.courses.get(&id).cloned())
    }
}

#[async_trait]
impl ChapterRepository for InMemoryStore {
    async fn find_by_id(&self, id: ChapterId) -> DomainResult<Option<Chapter>> {
        Ok(self.lock()?.chapters.get(&id).cloned())
    }

    async fn insert(&self, chapter: NewChapter) -> DomainResult<Chapter> {
        let mut state = self.lock()?;
        if !state.courses.contains_key(&chapter.course_id) {
            return Err(DomainError::NotFound("course not found".into()));
        }
        let chapter = Chapter {
            id: ChapterId::new(state.next_id())?,
            course_id: chapter.course_id,
            title: chapter.title,
            position: chapter.position,
        };
        state.chapters.insert(chapter.id, chapter.clone());
        Ok(chapter)
    }

    async fn list_by_course(&self, course_id: CourseId) -> DomainResult<Vec<Chapter>> {
        let state = self.lock()?;
        let mut chapters: Vec<Chapter> = state
            .chapters
            .values()
            .filter(|chapter| chapter.course_id == course_id)
            .cloned()
            .collect();
        chapters.sort_by_key(|chapter| (chapter.position, chapter.id));
        Ok(chapters)
    }
}

#[async_trait]
impl LessonRepository for InMemoryStore {
    async fn find_by_id(&self, id: LessonId) -> DomainResult<Option<Lesson>> {
        Ok(self.lock()?.lessons.get(&id).cloned())
    }

    async fn insert(&self, lesson: NewLesson) -> DomainResult<Lesson> {
        let mut state = self.lock()?;
        if !state.chapters.contains_key(&lesson.chapter_id) {
            return Err(DomainError::NotFound("chapter not found".into()));
        }
        let id = LessonId::new(state.next_id())?;
        let lesson = lesson.into_lesson(id);
        state.lessons.insert(id, lesson.clone());
        Ok(lesson)
    }

    async fn update(&self, lesson: &Lesson) -> DomainResult<Lesson> {
        let mut state = self.lock()?;
        if !state.chapters.contains_key(&lesson.chapter_id) {
            return Err(DomainError::NotFound("chapter not found".into()));
        }
        match state.lessons.get_mut(&lesson.id) {
            Some(stored) => {
                *stored = lesson.clone();
                Ok(lesson.clone())
            }
            None => Err(DomainError::NotFound("lesson not found".into())),
        }
    }

    async fn delete(&self, id: LessonId) -> DomainResult<()> {
        let mut state = self.lock()?;
        state
            .lessons
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("lesson not found".into()))
    }
}
