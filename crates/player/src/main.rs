//! Sheetz Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sheetz_player::runner::{config::RunnerConfig, RunnerDeps};

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetz_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Sheetz Player");

    #[allow(unused_mut)]
    let mut config = RunnerConfig::from_env();

    // Shell kind follows the viewport width in the browser
    #[cfg(target_arch = "wasm32")]
    {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0);
        if width < 768.0 {
            config.shell = sheetz_player::ui::ShellKind::Mobile;
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let platform = match &config.storage_path {
        Some(path) => sheetz_player::infrastructure::platform::create_platform_with_storage(path),
        None => sheetz_player::infrastructure::platform::create_platform(),
    };

    #[cfg(target_arch = "wasm32")]
    let platform = sheetz_player::infrastructure::platform::create_platform();

    sheetz_player::runner::run(RunnerDeps { platform, config })
}
