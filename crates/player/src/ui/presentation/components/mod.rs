//! Reusable UI components

mod selection_bar;

pub use selection_bar::SelectionBar;
