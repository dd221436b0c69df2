use super::CourseCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CourseDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        company::{CompanyId, Ownership},
        content::ContentTitle,
        course::NewCourse,
    },
};

pub struct InitCourseCommand {
    pub title: String,
    /// Links the new course to this company when set.
    pub company_id: Option<i64>,
}

impl CourseCommandService {
    pub async fn init_course(
        &self,
        actor: &AuthenticatedUser,
        command: InitCourseCommand,
    ) -> ApplicationResult<CourseDto> {
        let title = ContentTitle::new(command.title)?;

        let company = match command.company_id {
            Some(raw) => {
                let company_id = CompanyId::new(raw)?;
                if self.companies.find_by_id(company_id).await?.is_none() {
                    return Err(ApplicationError::not_found("company not found"));
                }
                self.access
                    .require_admin_or_company_admin_or_editor(actor, company_id)
                    .await?;
                Some(company_id)
            }
            None => None,
        };

        let new_course = NewCourse {
            title,
            author_id: actor.id,
            created_at: self.clock.now(),
        };
        let (course, ownership) = match company {
            Some(company_id) => (
                self.write_repo.insert_linked(new_course, company_id).await?,
                Ownership::Company(company_id),
            ),
            None => (self.write_repo.insert(new_course).await?, Ownership::Platform),
        };

        tracing::info!(
            course_id = %course.id,
            author_id = %actor.id,
            company_id = ?company.map(i64::from),
            "course initialised"
        );
        Ok(CourseDto::new(course, ownership))
    }
}
