//! Credentials for corporate single sign-on and proxy authentication.
//!
//! Resolution order: JSON file, then environment variables, then nothing
//! (the engine falls back to platform single sign-on).

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

/// Environment variables checked for server credentials, in order.
const USER_VARS: &[&str] = &["IWA_USERNAME", "NTLM_USERNAME"];
const PASSWORD_VARS: &[&str] = &["IWA_PASSWORD", "NTLM_PASSWORD"];

const PROXY_USER_VARS: &[&str] = &["PROXY_USERNAME"];
const PROXY_PASSWORD_VARS: &[&str] = &["PROXY_PASSWORD"];

/// A username/password pair. `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Where a set of credentials came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    File,
    Environment,
    /// No explicit credentials; rely on the platform's single sign-on.
    PlatformSso,
}

/// On-disk shape. Older files use the short keys; when several are present
/// the first non-empty one wins.
#[derive(Debug, Deserialize)]
struct CredentialsFile {
    username: Option<String>,
    user: Option<String>,
    password: Option<String>,
    pass: Option<String>,
    pwd: Option<String>,
}

impl CredentialsFile {
    fn into_credentials(self) -> Option<Credentials> {
        let user = first_non_empty([self.username, self.user])?;
        let password = first_non_empty([self.password, self.pass, self.pwd])?;
        Some(Credentials::new(user, password))
    }
}

fn first_non_empty(candidates: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

/// Server credentials from `auth.json` or the environment.
pub fn resolve_credentials(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> (Option<Credentials>, CredentialSource) {
    resolve(path, &lookup, USER_VARS, PASSWORD_VARS)
}

/// Proxy credentials from `proxy.json` or the environment.
pub fn resolve_proxy_credentials(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> (Option<Credentials>, CredentialSource) {
    resolve(path, &lookup, PROXY_USER_VARS, PROXY_PASSWORD_VARS)
}

/// Process environment lookup for use with the resolvers.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn resolve(
    path: &Path,
    lookup: &dyn Fn(&str) -> Option<String>,
    user_vars: &[&str],
    password_vars: &[&str],
) -> (Option<Credentials>, CredentialSource) {
    if let Some(creds) = read_file(path) {
        info!("loaded credentials from {}", path.display());
        return (Some(creds), CredentialSource::File);
    }

    let first = |vars: &[&str]| {
        vars.iter()
            .find_map(|v| lookup(v).filter(|s| !s.is_empty()))
    };
    if let (Some(user), Some(password)) = (first(user_vars), first(password_vars)) {
        info!("loaded credentials from environment variables");
        return (
            Some(Credentials::new(user, password)),
            CredentialSource::Environment,
        );
    }

    (None, CredentialSource::PlatformSso)
}

fn read_file(path: &Path) -> Option<Credentials> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("failed to read {}: {e}", path.display());
            return None;
        }
    };
    match serde_json::from_str::<CredentialsFile>(&content) {
        Ok(file) => {
            let creds = file.into_credentials();
            if creds.is_none() {
                warn!("{} has no usable username/password", path.display());
            }
            creds
        }
        Err(e) => {
            warn!("failed to parse {}: {e}", path.display());
            None
        }
    }
}
