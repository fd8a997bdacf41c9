//! Organization entity - The top-level owner of academies

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::OrganizationId;

/// An organization that runs one or more academies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Organization {
    /// Create an organization with a fresh ID.
    ///
    /// The name is trimmed and must not be empty.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            id: OrganizationId::new(),
            name: validated_name(name.into(), "Organization")?,
            description: String::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

pub(crate) fn validated_name(name: String, entity: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{entity} name cannot be empty")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_name() {
        let org = Organization::new("  Northwind Trust ").expect("valid name");
        assert_eq!(org.name, "Northwind Trust");
        assert!(org.description.is_empty());
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = Organization::new("   ").expect_err("blank name");
        assert_eq!(
            err,
            DomainError::Validation("Organization name cannot be empty".to_string())
        );
    }

    #[test]
    fn test_equality_is_by_value() {
        let org = Organization::new("Northwind Trust").expect("valid name");
        let copy = org.clone();
        assert_eq!(org, copy);

        let renamed = Organization {
            name: "Southwind Trust".to_string(),
            ..org.clone()
        };
        assert_ne!(org, renamed);
    }

    #[test]
    fn test_serde_uses_camel_case_and_defaults_description() {
        let org = Organization::new("Northwind Trust").expect("valid name");
        let json = serde_json::json!({ "id": org.id, "name": "Northwind Trust" });

        let parsed: Organization = serde_json::from_value(json).expect("deserialize");
        assert_eq!(parsed, org);
    }
}
