//! Selection state and its scoping
//!
//! `SelectionStore` holds the selected organization / academy pair for one
//! provider scope. UI consumers reach it through Dioxus context (see
//! `crate::ui::presentation::state`); everything else goes through a `ScopeRegistry`.

mod scope;
mod selection_state;

pub use scope::{ScopeError, ScopeId, ScopeRegistry, SelectionScope};
pub use selection_state::{
    SelectionChange, SelectionField, SelectionState, SelectionStore, SubscriptionId,
};
