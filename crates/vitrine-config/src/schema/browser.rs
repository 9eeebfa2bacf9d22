//! Embedded browser engine settings.

use serde::{Deserialize, Serialize};

/// Chrome-like user agent; some corporate proxies filter unknown agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";

/// Settings for the shared browser profile and its engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Directory name of the persistent profile under the data directory.
    pub profile_name: String,
    pub user_agent: String,
    /// Disk cache cap in megabytes (valid range: 16-8192).
    pub cache_max_mb: u32,
    pub devtools: bool,
    /// Host patterns allowed to receive integrated (NTLM/Negotiate) auth,
    /// e.g. `*.corp.example`. Empty disables integrated auth.
    pub auth_server_allowlist: Vec<String>,
    /// Extra command-line arguments passed to the engine where supported.
    pub extra_args: Vec<String>,
    /// URL prefixes panes may navigate to. Empty allows everything.
    pub allowed_origins: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            profile_name: "profile".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache_max_mb: 512,
            devtools: cfg!(debug_assertions),
            auth_server_allowlist: Vec::new(),
            extra_args: vec![
                "--ignore-gpu-blocklist".to_string(),
                "--enable-gpu-rasterization".to_string(),
                "--enable-zero-copy".to_string(),
                "--disable-background-timer-throttling".to_string(),
                "--disable-backgrounding-occluded-windows".to_string(),
                "--disable-renderer-backgrounding".to_string(),
            ],
            allowed_origins: Vec::new(),
        }
    }
}

impl BrowserConfig {
    /// Engine arguments: integrated-auth allowlist, cache size, then extras.
    pub fn engine_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if !self.auth_server_allowlist.is_empty() {
            let hosts = self.auth_server_allowlist.join(",");
            args.push(format!("--auth-server-allowlist={hosts}"));
            args.push(format!("--auth-negotiate-delegate-whitelist={hosts}"));
            args.push("--auth-schemes=basic,digest,ntlm,negotiate".to_string());
        }
        args.push(format!(
            "--disk-cache-size={}",
            u64::from(self.cache_max_mb) * 1024 * 1024
        ));
        args.extend(self.extra_args.iter().cloned());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_args_without_allowlist() {
        let config = BrowserConfig {
            extra_args: Vec::new(),
            ..Default::default()
        };
        assert_eq!(config.engine_args(), vec!["--disk-cache-size=536870912"]);
    }

    #[test]
    fn engine_args_with_allowlist() {
        let config = BrowserConfig {
            auth_server_allowlist: vec!["*.corp.example".into(), "intranet".into()],
            extra_args: vec!["--foo".into()],
            ..Default::default()
        };
        let args = config.engine_args();
        assert_eq!(args[0], "--auth-server-allowlist=*.corp.example,intranet");
        assert_eq!(
            args[1],
            "--auth-negotiate-delegate-whitelist=*.corp.example,intranet"
        );
        assert_eq!(args[2], "--auth-schemes=basic,digest,ntlm,negotiate");
        assert_eq!(args.last().unwrap(), "--foo");
    }

    #[test]
    fn default_user_agent_is_chrome_like() {
        assert!(BrowserConfig::default().user_agent.contains("Chrome/"));
    }
}
