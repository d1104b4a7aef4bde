mod app_state;
mod cli;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use niwin_config::schema::NiwinConfig;

fn main() {
    let args = cli::parse();

    // Config is read before logging so the configured level can apply;
    // the load result is reported once the subscriber exists.
    let loaded = match args.config.as_deref() {
        Some(path) => niwin_config::load_config_from(Path::new(path)),
        None => niwin_config::load_config(),
    };

    let default_directive = loaded
        .as_ref()
        .map(|c| c.logging.level.directive())
        .unwrap_or("niwin=info");
    let log_directive = args.log_level.as_deref().unwrap_or(default_directive);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "niwin=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("niwin v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        NiwinConfig::default()
    });
    if args.no_pass_through {
        config.pass_through.enabled = false;
    }
    tracing::info!(
        pass_through = config.pass_through.enabled,
        poll_ms = config.pass_through.poll_interval_ms,
        "Config loaded"
    );

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::NiwinApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
