use super::CompanyCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, MemberDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        company::{CompanyRole, CompanyUserLink},
        user::UserId,
    },
};

pub struct AddMemberCommand {
    pub company_id: i64,
    pub user_id: i64,
    pub role: CompanyRole,
}

pub struct RemoveMemberCommand {
    pub company_id: i64,
    pub user_id: i64,
}

impl CompanyCommandService {
    /// Adds a member or changes the role of an existing one.
    pub async fn add_member(
        &self,
        actor: &AuthenticatedUser,
        command: AddMemberCommand,
    ) -> ApplicationResult<MemberDto> {
        let company = self.company(command.company_id).await?;
        self.access
            .require_admin_or_company_admin(actor, company.id)
            .await?;

        let user_id = UserId::new(command.user_id)?;
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ApplicationError::not_found("user not found"));
        }

        let link = self
            .companies
            .upsert_user_link(CompanyUserLink::new(company.id, user_id, command.role))
            .await?;
        tracing::info!(company_id = %company.id, user_id = %user_id, role = %command.role, "company member saved");
        Ok(link.into())
    }

    pub async fn remove_member(
        &self,
        actor: &AuthenticatedUser,
        command: RemoveMemberCommand,
    ) -> ApplicationResult<()> {
        let company = self.company(command.company_id).await?;
        self.access
            .require_admin_or_company_admin(actor, company.id)
            .await?;

        let user_id = UserId::new(command.user_id)?;
        if !self
            .companies
            .deactivate_user_link(company.id, user_id)
            .await?
        {
            return Err(ApplicationError::not_found("membership not found"));
        }
        tracing::info!(company_id = %company.id, user_id = %user_id, "company member removed");
        Ok(())
    }
}
