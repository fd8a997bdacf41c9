use dioxus::prelude::*;

use crate::catalog::Catalog;

pub mod presentation;

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl ShellKind {
    /// Parse the `ACADEMYHUB_SHELL` value; unknown values yield `None`.
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "desktop" => Some(Self::Desktop),
            "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let shell = use_context::<ShellKind>();
    let catalog = use_context::<Catalog>();

    let content = rsx! {
        presentation::state::SelectionProvider {
            presentation::components::SelectionBar { catalog: catalog.clone() }
        }
    };

    match shell {
        ShellKind::Desktop => rsx! {
            DesktopShell { {content} }
        },
        ShellKind::Mobile => rsx! {
            MobileShell { {content} }
        },
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            style: "width: 100vw; height: 100vh; overflow: hidden;",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        // Narrow screens scroll instead of clipping.
        div {
            style: "width: 100vw; height: 100vh; overflow-y: auto; font-size: 14px;",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_kind_from_env_value() {
        assert_eq!(ShellKind::from_env_value("desktop"), Some(ShellKind::Desktop));
        assert_eq!(ShellKind::from_env_value("  Mobile \n"), Some(ShellKind::Mobile));
        assert_eq!(ShellKind::from_env_value("tablet"), None);
        assert_eq!(ShellKind::default(), ShellKind::Desktop);
    }
}
