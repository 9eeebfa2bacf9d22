//! Preemptive Basic authentication for pane requests.
//!
//! wry exposes no challenge callback, so explicit credentials are sent as an
//! `Authorization` header on top-level loads. The header only goes to the
//! https origin of the pane's configured URL; any other destination is loaded
//! without it. Integrated auth (NTLM, Negotiate) is left to the engine through
//! its auth allowlist switches.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;
use vitrine_shell::{AuthBroker, ChallengeKind, CredentialSink};
use wry::http::header::{HeaderValue, AUTHORIZATION};
use wry::http::{HeaderMap, Uri};

/// Collects one username/password pair and renders it as a Basic header.
#[derive(Debug, Default)]
pub struct BasicAuthHeader {
    user: String,
    password: String,
}

impl CredentialSink for BasicAuthHeader {
    fn set_user(&mut self, user: &str) {
        self.user = user.to_string();
    }

    fn set_password(&mut self, password: &str) {
        self.password = password.to_string();
    }
}

impl BasicAuthHeader {
    /// `Basic base64(user:password)`.
    pub fn value(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.user, self.password));
        format!("Basic {token}")
    }

    pub fn into_headers(self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match HeaderValue::from_str(&self.value()) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(e) => debug!(error = %e, "credentials not representable as a header"),
        }
        headers
    }
}

/// Request headers for pane loads. Empty when the broker has no server
/// credentials.
pub fn auth_headers(broker: &AuthBroker) -> HeaderMap {
    let mut sink = BasicAuthHeader::default();
    if broker.answer(ChallengeKind::Server, &mut sink) {
        sink.into_headers()
    } else {
        HeaderMap::new()
    }
}

/// Host and port of an https URL; `None` for any other scheme or an
/// unparsable URL.
fn https_origin(url: &str) -> Option<(String, u16)> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let uri: Uri = without_fragment.parse().ok()?;
    if !uri.scheme_str()?.eq_ignore_ascii_case("https") {
        return None;
    }
    let host = uri.host()?.to_ascii_lowercase();
    Some((host, uri.port_u16().unwrap_or(443)))
}

/// Whether credentials for `home` may be attached to a load of `url`: both
/// must be https with the same host and port.
pub fn credentials_allowed(url: &str, home: &str) -> bool {
    match (https_origin(url), https_origin(home)) {
        (Some(target), Some(home)) => target == home,
        _ => false,
    }
}
