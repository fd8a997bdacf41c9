//! UI-side state: context providers and hooks over `crate::state`

mod selection_context;

pub use selection_context::{try_use_selection, use_selection, SelectionHandle, SelectionProvider};
