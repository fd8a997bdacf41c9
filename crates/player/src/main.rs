//! AcademyHub Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use academyhub_player::ui::ShellKind;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "academyhub_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting AcademyHub Player");

    // Shell kind (desktop vs mobile layout)
    let shell = {
        #[cfg(target_arch = "wasm32")]
        {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(1024.0);

            if width < 768.0 {
                ShellKind::Mobile
            } else {
                ShellKind::Desktop
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::env::var("ACADEMYHUB_SHELL")
                .ok()
                .and_then(|value| ShellKind::from_env_value(&value))
                .unwrap_or_default()
        }
    };
    tracing::debug!(?shell, "Shell selected");

    let catalog = match academyhub_player::catalog::sample_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(error = %err, "Failed to build organization catalog");
            return;
        }
    };

    dioxus::LaunchBuilder::new()
        .with_context(shell)
        .with_context(catalog)
        .launch(academyhub_player::ui::app);
}
