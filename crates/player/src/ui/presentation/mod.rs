//! Presentation layer - Dioxus UI components and context providers

pub mod components;
pub mod state;
