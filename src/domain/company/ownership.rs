use crate::domain::company::value_objects::CompanyId;

/// Who holds editorial rights over a course besides its author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Platform,
    Company(CompanyId),
}

impl Ownership {
    pub fn company(self) -> Option<CompanyId> {
        match self {
            Ownership::Platform => None,
            Ownership::Company(id) => Some(id),
        }
    }

    pub fn is_company(self) -> bool {
        matches!(self, Ownership::Company(_))
    }
}
