use super::CompanyCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CourseLinkDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::company::CompanyCourseLink,
};

pub struct LinkCourseCommand {
    pub course_id: i64,
    pub company_id: i64,
}

pub struct SuspendCourseLinkCommand {
    pub course_id: i64,
}

pub struct DeleteCourseLinkCommand {
    pub course_id: i64,
}

impl CompanyCommandService {
    /// Hands a course to a company. Linking to the company that already owns
    /// it returns the existing link.
    pub async fn link_course(
        &self,
        actor: &AuthenticatedUser,
        command: LinkCourseCommand,
    ) -> ApplicationResult<CourseLinkDto> {
        let course = self.catalog.course(command.course_id).await?;
        let company = self.company(command.company_id).await?;
        self.access
            .require_admin_or_company_admin_or_editor(actor, company.id)
            .await?;

        if let Some(existing) = self.companies.active_course_link(course.id).await? {
            if existing.company_id == company.id {
                return Ok(existing.into());
            }
            return Err(ApplicationError::conflict(
                "course is already linked to another company",
            ));
        }

        let link = CompanyCourseLink::new(company.id, course.id, self.clock.now());
        let created = self.companies.insert_course_link(link).await?;
        tracing::info!(course_id = %course.id, company_id = %company.id, "course linked to company");
        Ok(created.into())
    }

    pub async fn suspend_course_link(
        &self,
        actor: &AuthenticatedUser,
        command: SuspendCourseLinkCommand,
    ) -> ApplicationResult<CourseLinkDto> {
        let course = self.catalog.course(command.course_id).await?;
        let link = self
            .companies
            .active_course_link(course.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("course has no active company link"))?;
        self.access
            .require_admin_or_company_admin(actor, link.company_id)
            .await?;

        let suspended = self
            .companies
            .suspend_course_link(course.id, self.clock.now())
            .await?
            .ok_or_else(|| ApplicationError::not_found("course has no active company link"))?;
        tracing::info!(course_id = %course.id, company_id = %suspended.company_id, "company link suspended");
        Ok(suspended.into())
    }

    /// Removes every link of the course. With an active link the owning
    /// company's admins may do this; otherwise only platform admins.
    pub async fn delete_course_link(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCourseLinkCommand,
    ) -> ApplicationResult<()> {
        let course = self.catalog.course(command.course_id).await?;
        match self.companies.active_course_link(course.id).await? {
            Some(link) => {
                self.access
                    .require_admin_or_company_admin(actor, link.company_id)
                    .await?;
            }
            None if actor.is_admin() => {}
            None => {
                return Err(ApplicationError::forbidden(
                    "platform admin role required",
                ));
            }
        }

        let removed = self.companies.delete_course_links(course.id).await?;
        tracing::info!(course_id = %course.id, removed, "company links deleted");
        Ok(())
    }
}
