// src/infrastructure/repositories/memory/mod.rs
//! Process-local store implementing every repository trait. It honours the
//! same contracts as the Postgres store: versioned writes, a single active
//! company link per course, and cascading course deletes.
mod accounts;
mod content;

use crate::application::ApplicationResult;
use crate::application::ports::telemetry::{ViewEvent, ViewTarget, ViewTracker};
use crate::domain::article::{Article, ArticleId};
use crate::domain::company::{Company, CompanyCourseLink, CompanyId, CompanyUserLink};
use crate::domain::course::{Chapter, ChapterId, Course, CourseId, Lesson, LessonId};
use crate::domain::enrollment::Enrollment;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::TagId;
use crate::domain::user::{Plan, PlatformRole, User, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct State {
    last_id: i64,
    users: BTreeMap<UserId, User>,
    tags: BTreeSet<TagId>,
    companies: BTreeMap<CompanyId, Company>,
    articles: BTreeMap<ArticleId, Article>,
    courses: BTreeMap<CourseId, Course>,
    chapters: BTreeMap<ChapterId, Chapter>,
    lessons: BTreeMap<LessonId, Lesson>,
    course_links: Vec<CompanyCourseLink>,
    user_links: Vec<CompanyUserLink>,
    enrollments: BTreeMap<(UserId, CourseId), Enrollment>,
    views: Vec<ViewEvent>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Cloning shares the underlying tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| DomainError::Persistence("in-memory store poisoned".into()))
    }

    pub fn add_user(
        &self,
        username: &str,
        role: PlatformRole,
        plan: Plan,
        created_at: DateTime<Utc>,
    ) -> DomainResult<User> {
        let username = Username::new(username)?;
        let mut state = self.lock()?;
        if state.users.values().any(|u| u.username == username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let user = User {
            id: UserId::new(state.next_id())?,
            username,
            role,
            plan,
            is_active: true,
            created_at,
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn add_company(&self, name: &str) -> DomainResult<Company> {
        let mut state = self.lock()?;
        let company = Company {
            id: CompanyId::new(state.next_id())?,
            name: name.to_owned(),
        };
        state.companies.insert(company.id, company.clone());
        Ok(company)
    }

    pub fn add_tag(&self) -> DomainResult<TagId> {
        let mut state = self.lock()?;
        let id = TagId::new(state.next_id())?;
        state.tags.insert(id);
        Ok(id)
    }

    /// Creates or reactivates an enrollment, keeping recorded progress.
    pub fn enroll(&self, user_id: UserId, course_id: CourseId) -> DomainResult<Enrollment> {
        let mut state = self.lock()?;
        if !state.courses.contains_key(&course_id) {
            return Err(DomainError::NotFound("course not found".into()));
        }
        let enrollment = state
            .enrollments
            .entry((user_id, course_id))
            .or_insert_with(|| Enrollment::new(user_id, course_id));
        enrollment.active = true;
        Ok(enrollment.clone())
    }

    pub fn cancel_enrollment(&self, user_id: UserId, course_id: CourseId) -> DomainResult<()> {
        let mut state = self.lock()?;
        match state.enrollments.get_mut(&(user_id, course_id)) {
            Some(enrollment) => {
                enrollment.active = false;
                Ok(())
            }
            None => Err(DomainError::NotFound("enrollment not found".into())),
        }
    }

    pub fn course_ids(&self) -> DomainResult<Vec<CourseId>> {
        Ok(self.lock()?.courses.keys().copied().collect())
    }

    pub fn view_events(&self) -> DomainResult<Vec<ViewEvent>> {
        Ok(self.lock()?.views.clone())
    }
}

#[async_trait]
impl ViewTracker for InMemoryStore {
    async fn record(&self, event: ViewEvent) -> ApplicationResult<()> {
        let mut state = self.lock()?;
        match event.target {
            ViewTarget::Article(id) => {
                if let Some(article) = state.articles.get_mut(&id) {
                    article.view_count += 1;
                }
            }
            ViewTarget::Course(id) => {
                if let Some(course) = state.courses.get_mut(&id) {
                    course.view_count += 1;
                }
            }
            ViewTarget::Lesson(_) => {}
        }
        state.views.push(event);
        Ok(())
    }
}
