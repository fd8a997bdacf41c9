//! Organization / academy picker
//!
//! Shows the current selection with clear actions and offers the catalog's
//! organizations and academies as buttons. With an organization selected,
//! only its academies are offered; the store itself does not enforce that.

use academyhub_domain::{Academy, Organization};
use dioxus::prelude::*;

use crate::catalog::Catalog;
use crate::presentation::state::use_selection;

#[component]
pub fn SelectionBar(catalog: Catalog) -> Element {
    let selection = use_selection();
    let current = selection.selection();

    let offered: Vec<Academy> = match &current.selected_organization {
        Some(organization) => catalog
            .academies_of(&organization.id)
            .into_iter()
            .cloned()
            .collect(),
        None => catalog.academies.clone(),
    };

    let organization_label = current
        .selected_organization
        .as_ref()
        .map(|org| org.name.clone())
        .unwrap_or_else(|| "No organization".to_string());
    let academy_label = current
        .selected_academy
        .as_ref()
        .map(|academy| academy.name.clone())
        .unwrap_or_else(|| "No academy".to_string());

    let no_academies = offered.is_empty();
    let clear_organization = selection.clone();
    let clear_academy = selection.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px; padding: 16px;",

            // Current selection
            div {
                style: "display: flex; gap: 16px; align-items: center;",
                span { "{organization_label}" }
                if current.selected_organization.is_some() {
                    button {
                        onclick: move |_| clear_organization.set_selected_organization(None),
                        "Clear organization"
                    }
                }
                span { "{academy_label}" }
                if current.selected_academy.is_some() {
                    button {
                        onclick: move |_| clear_academy.set_selected_academy(None),
                        "Clear academy"
                    }
                }
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 8px;",
                for organization in catalog.organizations {
                    OrganizationButton { key: "{organization.id}", organization: organization.clone() }
                }
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 8px;",
                if no_academies {
                    span { "No academies" }
                }
                for academy in offered {
                    AcademyButton { key: "{academy.id}", academy: academy.clone() }
                }
            }
        }
    }
}

#[component]
fn OrganizationButton(organization: Organization) -> Element {
    let selection = use_selection();
    let is_selected =
        selection.selection().selected_organization.as_ref() == Some(&organization);
    let label = organization.name.clone();

    rsx! {
        button {
            disabled: is_selected,
            onclick: move |_| selection.set_selected_organization(Some(organization.clone())),
            "{label}"
        }
    }
}

#[component]
fn AcademyButton(academy: Academy) -> Element {
    let selection = use_selection();
    let is_selected = selection.selection().selected_academy.as_ref() == Some(&academy);
    let label = academy.name.clone();

    rsx! {
        button {
            disabled: is_selected,
            onclick: move |_| selection.set_selected_academy(Some(academy.clone())),
            "{label}"
        }
    }
}
