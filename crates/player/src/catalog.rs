//! In-memory organization / academy catalog
//!
//! Loading organizations and academies belongs to another collaborator; the
//! player binary ships this fixed catalog so the selection UI has something
//! to pick from.

use academyhub_domain::{Academy, DomainError, Organization, OrganizationId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub organizations: Vec<Organization>,
    pub academies: Vec<Academy>,
}

impl Catalog {
    pub fn academies_of(&self, organization_id: &OrganizationId) -> Vec<&Academy> {
        self.academies
            .iter()
            .filter(|academy| &academy.organization_id == organization_id)
            .collect()
    }
}

/// Two organizations with two academies each
pub fn sample_catalog() -> Result<Catalog, DomainError> {
    let northwind = Organization::new("Northwind Learning Trust")?
        .with_description("Regional vocational schools");
    let harbor = Organization::new("Harbor Arts Collective")?;

    let academies = vec![
        Academy::new(northwind.id, "Software Engineering Academy")?,
        Academy::new(northwind.id, "Electrical Trades Academy")?,
        Academy::new(harbor.id, "Film & Media Academy")?
            .with_description("Evening and weekend cohorts"),
        Academy::new(harbor.id, "Music Production Academy")?,
    ];

    Ok(Catalog {
        organizations: vec![northwind, harbor],
        academies,
    })
}
