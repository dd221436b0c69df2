// src/infrastructure/repositories/memory/accounts.rs
use super::InMemoryStore;
use crate::domain::company::{
    Company, CompanyCourseLink, CompanyId, CompanyRepository, CompanyUserLink,
};
use crate::domain::course::{CourseId, LessonId};
use crate::domain::enrollment::{Enrollment, EnrollmentRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{TagId, TagRepository};
use crate::domain::user::{User, UserId, UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.lock()?.users.get(&id).cloned())
    }
}

#[async_trait]
impl TagRepository for InMemoryStore {
    async fn exists(&self, id: TagId) -> DomainResult<bool> {
        Ok(self.lock()?.tags.contains(&id))
    }
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn find_by_id(&self, id: CompanyId) -> DomainResult<Option<Company>> {
        Ok(self.lock()?.companies.get(&id).cloned())
    }

    async fn active_course_link(
        &self,
        course_id: CourseId,
    ) -> DomainResult<Option<CompanyCourseLink>> {
        let state = self.lock()?;
        Ok(state
            .course_links
            .iter()
            .find(|link| link.active && link.course_id == course_id)
            .cloned())
    }

    async fn insert_course_link(
        &self,
        link: CompanyCourseLink,
    ) -> DomainResult<CompanyCourseLink> {
        let mut state = self.lock()?;
        if !state.companies.contains_key(&link.company_id) {
            return Err(DomainError::NotFound("company not found".into()));
        }
        if !state.courses.contains_key(&link.course_id) {
            return Err(DomainError::NotFound("course not found".into()));
        }
        if link.active
            && state
                .course_links
                .iter()
                .any(|existing| existing.active && existing.course_id == link.course_id)
        {
            return Err(DomainError::Conflict(
                "course already has an active company link".into(),
            ));
        }
        state.course_links.push(link.clone());
        Ok(link)
    }

    async fn suspend_course_link(
        &self,
        course_id: CourseId,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<CompanyCourseLink>> {
        let mut state = self.lock()?;
        let link = state
            .course_links
            .iter_mut()
            .find(|link| link.active && link.course_id == course_id);
        Ok(link.map(|link| {
            link.suspend(at);
            link.clone()
        }))
    }

    async fn delete_course_links(&self, course_id: CourseId) -> DomainResult<u64> {
        let mut state = self.lock()?;
        let before = state.course_links.len();
        state.course_links.retain(|link| link.course_id != course_id);
        let removed = before - state.course_links.len();
        u64::try_from(removed).map_err(|_| DomainError::Persistence("link count overflow".into()))
    }

    async fn list_active_course_links(
        &self,
        company_id: CompanyId,
    ) -> DomainResult<Vec<CompanyCourseLink>> {
        let state = self.lock()?;
        let mut links: Vec<CompanyCourseLink> = state
            .course_links
            .iter()
            .filter(|link| link.active && link.company_id == company_id)
            .cloned()
            .collect();
        links.sort_by_key(|link| (link.linked_at, link.course_id));
        Ok(links)
    }

    async fn active_user_link(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> DomainResult<Option<CompanyUserLink>> {
        let state = self.lock()?;
        Ok(state
            .user_links
            .iter()
            .find(|link| link.active && link.company_id == company_id && link.user_id == user_id)
            .cloned())
    }

    async fn upsert_user_link(&self, link: CompanyUserLink) -> DomainResult<CompanyUserLink> {
        let mut state = self.lock()?;
        if !state.companies.contains_key(&link.company_id) {
            return Err(DomainError::NotFound("company not found".into()));
        }
        if !state.users.contains_key(&link.user_id) {
            return Err(DomainError::NotFound("user not found".into()));
        }
        let position = state.user_links.iter().position(|existing| {
            existing.company_id == link.company_id && existing.user_id == link.user_id
        });
        match position {
            Some(index) => state.user_links[index] = link.clone(),
            None => state.user_links.push(link.clone()),
        }
        Ok(link)
    }

    async fn deactivate_user_link(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> DomainResult<bool> {
        let mut state = self.lock()?;
        match state
            .user_links
            .iter_mut()
            .find(|link| link.active && link.company_id == company_id && link.user_id == user_id)
        {
            Some(link) => {
                link.active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryStore {
    async fn active_enrollment(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> DomainResult<Option<Enrollment>> {
        let state = self.lock()?;
        Ok(state
            .enrollments
            .get(&(user_id, course_id))
            .filter(|enrollment| enrollment.active)
            .cloned())
    }

    async fn count_active(&self, course_id: CourseId) -> DomainResult<u64> {
        let state = self.lock()?;
        let count = state
            .enrollments
            .values()
            .filter(|enrollment| enrollment.active && enrollment.course_id == course_id)
            .count();
        u64::try_from(count)
            .map_err(|_| DomainError::Persistence("enrollment count overflow".into()))
    }

    async fn mark_lesson_completed(
        &self,
        user_id: UserId,
        course_id: CourseId,
        lesson_id: LessonId,
    ) -> DomainResult<Enrollment> {
        let mut state = self.lock()?;
        if !state.lessons.contains_key(&lesson_id) {
            return Err(DomainError::NotFound("lesson not found".into()));
        }
        let enrollment = state
            .enrollments
            .get_mut(&(user_id, course_id))
            .filter(|enrollment| enrollment.active)
            .ok_or_else(|| DomainError::NotFound("enrollment not found".into()))?;
        enrollment.complete(lesson_id);
        Ok(enrollment.clone())
    }
}
