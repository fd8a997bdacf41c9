//! AcademyHub player crate.
//!
//! Holds the selected organization / academy state, exposes it to the UI
//! tree through a Dioxus provider, and ships the picker UI. Multi-platform
//! support is provided via compile-time `cfg` selection.

pub mod catalog;
pub mod state;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use state::{ScopeError, ScopeRegistry, SelectionState, SelectionStore};
pub use ui::app;
pub use ui::presentation::state::{try_use_selection, use_selection, SelectionProvider};
pub use ui::ShellKind;
