//! Default `settings.toml` with inline documentation comments.

pub(crate) fn default_settings_toml() -> &'static str {
    r##"# Vitrine settings
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[refresh]
# default_interval_secs = 60   # 5-86400, used when a window sets refresh_secs = 0
# recheck_delay_ms = 2000      # wait after "load finished" before checking progress
# settle_delay_ms = 1000       # wait after a complete load before swapping

[browser]
# profile_name = "profile"
# user_agent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ..."
# cache_max_mb = 512           # 16-8192
# devtools = false
# auth_server_allowlist = ["*.corp.example"]
# extra_args = ["--ignore-gpu-blocklist"]
# allowed_origins = []         # empty = allow all

[edit]
# resize_margin = 16           # 4-64
# min_window_size = 200        # 50-2000
# zoom_min = 25
# zoom_max = 300

[files]
# windows = "windows.json"
# layouts = "layouts.json"
# views = "views.json"
# credentials = "auth.json"
# proxy_credentials = "proxy.json"

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
}
