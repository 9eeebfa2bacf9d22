mod app_state;
mod cli;
mod ui;

use std::path::{Path, PathBuf};

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use vitrine_config::credentials::{env_lookup, resolve_credentials, resolve_proxy_credentials};
use vitrine_config::{paths, validation, ConfigPaths, VitrineSettings};
use vitrine_layout::{LayoutStore, ViewStore};
use vitrine_shell::{AuthBroker, EditLimits, Shell};
use vitrine_webview::BrowserProfile;

const DEFAULT_LOG_DIRECTIVE: &str = "vitrine=info";

/// Load environment variables from a .env file (KEY=VALUE lines).
/// Variables already set in the environment win.
fn load_dotenv(config_dir: &Path) {
    let candidates = [PathBuf::from(".env"), config_dir.join(".env")];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

/// `--log-level`, then `[logging] level`, then `vitrine=info`.
fn init_logging(cli_directive: Option<&str>, settings_directive: Option<&str>) {
    let directive: Option<Directive> = cli_directive
        .and_then(|d| d.parse().ok())
        .or_else(|| settings_directive.and_then(|d| d.parse().ok()))
        .or_else(|| DEFAULT_LOG_DIRECTIVE.parse().ok());

    let mut filter = EnvFilter::from_default_env();
    if let Some(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = cli::parse();

    let config_dir = paths::resolve_config_dir(args.config_dir.as_deref())
        .unwrap_or_else(|_| PathBuf::from("config"));
    load_dotenv(&config_dir);

    // Settings are read before logging so `[logging] level` can take effect.
    let loaded = vitrine_config::load_settings(&config_dir);
    let settings_directive = loaded
        .as_ref()
        .ok()
        .map(|(settings, _)| settings.logging.level.directive());
    init_logging(args.log_level.as_deref(), settings_directive);

    tracing::info!("Vitrine v{} starting...", env!("CARGO_PKG_VERSION"));

    let (settings, config_paths) = match loaded {
        Ok((settings, config_paths)) => {
            if let Err(e) = validation::validate(&settings) {
                tracing::warn!("Settings validation warning: {e}");
            }
            (settings, config_paths)
        }
        Err(e) => {
            tracing::warn!("Settings load failed, using defaults: {e}");
            let settings = VitrineSettings::default();
            let config_paths = ConfigPaths::new(&config_dir, &settings.files);
            (settings, config_paths)
        }
    };
    tracing::info!(dir = %config_paths.dir.display(), "Config directory");

    let windows = vitrine_config::load_window_configs(&config_paths.windows).unwrap_or_else(|e| {
        tracing::warn!("Window list load failed, starting with no windows: {e}");
        Vec::new()
    });
    let layouts = LayoutStore::load(&config_paths.layouts);
    let views = ViewStore::load(&config_paths.views);
    tracing::info!(
        windows = windows.len(),
        layouts = layouts.len(),
        views = views.len(),
        "Configuration loaded"
    );

    let (server, source) = resolve_credentials(&config_paths.credentials, env_lookup);
    // Proxy credentials are only reported at startup; wry gives no proxy challenge hook.
    let (proxy, _) = resolve_proxy_credentials(&config_paths.proxy_credentials, env_lookup);
    let broker = AuthBroker::new(server, proxy, source);

    let profile_dir = paths::ensure_profile_dir(&settings.browser.profile_name)
        .unwrap_or_else(|e| {
            let fallback = std::env::temp_dir().join("vitrine-profile");
            tracing::warn!(
                fallback = %fallback.display(),
                "Profile directory unavailable, using a temporary one: {e}"
            );
            fallback
        });
    let profile = BrowserProfile::new(&settings.browser, profile_dir);

    let shell = Shell::new(windows, layouts, views, Default::default())
        .with_edit_limits(EditLimits::from_config(&settings.edit))
        .with_refresh_config(settings.refresh.clone());

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::VitrineApp::new(shell, profile, &broker, args.view);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
