//! Academy entity - A school or training program run by an organization

use serde::{Deserialize, Serialize};

use super::organization::validated_name;
use crate::error::DomainError;
use crate::ids::{AcademyId, OrganizationId};
use crate::Organization;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Academy {
    pub id: AcademyId,
    /// Owning organization
    pub organization_id: OrganizationId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Academy {
    pub fn new(
        organization_id: OrganizationId,
        name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: AcademyId::new(),
            organization_id,
            name: validated_name(name.into(), "Academy")?,
            description: String::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn belongs_to(&self, organization: &Organization) -> bool {
        self.organization_id == organization.id
    }
}
