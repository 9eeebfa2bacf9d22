//! Answering authentication challenges from the engine.
//!
//! The engine binding implements `CredentialSink`; the broker decides which
//! credentials, if any, go into it.

use tracing::{debug, info};
use vitrine_config::{CredentialSource, Credentials};

/// Something that can receive a username and password for one challenge.
pub trait CredentialSink {
    fn set_user(&mut self, user: &str);
    fn set_password(&mut self, password: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeKind {
    Server,
    Proxy,
}

#[derive(Debug, Clone)]
pub struct AuthBroker {
    server: Option<Credentials>,
    proxy: Option<Credentials>,
    source: CredentialSource,
}

impl AuthBroker {
    pub fn new(
        server: Option<Credentials>,
        proxy: Option<Credentials>,
        source: CredentialSource,
    ) -> Self {
        match source {
            CredentialSource::PlatformSso => info!("no explicit credentials, using platform SSO"),
            other => info!(?other, "explicit credentials configured"),
        }
        Self {
            server,
            proxy,
            source,
        }
    }

    /// A broker with nothing to offer.
    pub fn platform_sso() -> Self {
        Self::new(None, None, CredentialSource::PlatformSso)
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }

    pub fn has_credentials(&self) -> bool {
        self.server.is_some()
    }

    /// Credentials for a challenge. Proxy challenges fall back to the server
    /// credentials.
    pub fn credentials_for(&self, kind: ChallengeKind) -> Option<&Credentials> {
        match kind {
            ChallengeKind::Server => self.server.as_ref(),
            ChallengeKind::Proxy => self.proxy.as_ref().or(self.server.as_ref()),
        }
    }

    /// Fill `sink` for a challenge. Returns `false` when there is nothing to
    /// supply and the engine should fall back to its own handling.
    pub fn answer(&self, kind: ChallengeKind, sink: &mut dyn CredentialSink) -> bool {
        match self.credentials_for(kind) {
            Some(creds) => {
                sink.set_user(&creds.username);
                sink.set_password(&creds.password);
                debug!(?kind, user = %creds.username, "supplied credentials");
                true
            }
            None => {
                debug!(?kind, "no credentials for challenge");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Captured {
        user: Option<String>,
        password: Option<String>,
    }

    impl CredentialSink for Captured {
        fn set_user(&mut self, user: &str) {
            self.user = Some(user.to_string());
        }
        fn set_password(&mut self, password: &str) {
            self.password = Some(password.to_string());
        }
    }

    #[test]
    fn server_challenge_gets_server_credentials() {
        let broker = AuthBroker::new(
            Some(Credentials::new("alice", "s3cret")),
            None,
            CredentialSource::File,
        );
        let mut sink = Captured::default();
        assert!(broker.answer(ChallengeKind::Server, &mut sink));
        assert_eq!(sink.user.as_deref(), Some("alice"));
        assert_eq!(sink.password.as_deref(), Some("s3cret"));
    }

    #[test]
    fn proxy_falls_back_to_server() {
        let broker = AuthBroker::new(
            Some(Credentials::new("alice", "s3cret")),
            None,
            CredentialSource::Environment,
        );
        assert_eq!(
            broker.credentials_for(ChallengeKind::Proxy).unwrap().username,
            "alice"
        );

        let broker = AuthBroker::new(
            Some(Credentials::new("alice", "s3cret")),
            Some(Credentials::new("proxyuser", "p")),
            CredentialSource::File,
        );
        assert_eq!(
            broker.credentials_for(ChallengeKind::Proxy).unwrap().username,
            "proxyuser"
        );
    }

    #[test]
    fn platform_sso_answers_nothing() {
        let broker = AuthBroker::platform_sso();
        let mut sink = Captured::default();
        assert!(!broker.answer(ChallengeKind::Server, &mut sink));
        assert!(sink.user.is_none());
        assert!(!broker.has_credentials());
        assert_eq!(broker.source(), CredentialSource::PlatformSso);
    }
}
