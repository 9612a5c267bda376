//! # Route gates
//!
//! Both gates run the same check and differ only in what they do with the
//! answer:
//!
//! | State | Protected gate | Public gate |
//! |-------|----------------|-------------|
//! | `Checking` | loading indicator | loading indicator |
//! | `Valid` | render children | redirect to `/app/cars` |
//! | `Invalid` | redirect to `/login` | render children |
//!
//! Nothing guarded is rendered before the check settles.

use store::TokenStore;
use tracing::debug;

use crate::transport::Transport;
use crate::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Checking,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    /// Authenticated area.
    Protected,
    /// Landing, login and signup.
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Loading,
    Render,
    Redirect,
}

impl GateState {
    pub fn outcome(self, kind: GateKind) -> GateOutcome {
        match (self, kind) {
            (GateState::Checking, _) => GateOutcome::Loading,
            (GateState::Valid, GateKind::Protected) => GateOutcome::Render,
            (GateState::Invalid, GateKind::Protected) => GateOutcome::Redirect,
            (GateState::Valid, GateKind::Public) => GateOutcome::Redirect,
            (GateState::Invalid, GateKind::Public) => GateOutcome::Render,
        }
    }
}

/// Settle the session state.
///
/// Without a stored token no request is made. A token the backend rejects is
/// removed from the store.
pub async fn check_session<T: Transport, S: TokenStore>(client: &ApiClient<T, S>) -> GateState {
    if !client.has_session() {
        debug!("No stored token");
        return GateState::Invalid;
    }

    match client.validate_session().await {
        Ok(()) => GateState::Valid,
        Err(e) => {
            if e.is_unauthorized() {
                debug!("Stored token rejected");
            } else {
                debug!("Session check failed: {}", e);
            }
            client.tokens().clear();
            GateState::Invalid
        }
    }
}

#[cfg(test)]
mod tests {
    use store::MemoryTokenStore;

    use super::*;
    use crate::testing::{client, MockTransport};

    #[tokio::test]
    async fn test_no_token_skips_network() {
        let transport = MockTransport::new();
        let tokens = MemoryTokenStore::new();
        let api = client(&transport, &tokens);

        let state = check_session(&api).await;

        assert_eq!(state, GateState::Invalid);
        assert_eq!(state.outcome(GateKind::Protected), GateOutcome::Redirect);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_rejected_token_is_cleared() {
        let transport = MockTransport::new().respond(401, r#"{"detail":"Token expired"}"#);
        let tokens = MemoryTokenStore::with_token("expired");
        let api = client(&transport, &tokens);

        let state = check_session(&api).await;

        assert_eq!(state.outcome(GateKind::Protected), GateOutcome::Redirect);
        assert!(tokens.get().is_none());
        assert_eq!(transport.request_count(), 1);
        assert!(transport.requests()[0].url.ends_with("/auth/validate"));
    }

    #[tokio::test]
    async fn test_server_error_also_invalidates() {
        let transport = MockTransport::new().respond(500, "");
        let tokens = MemoryTokenStore::with_token("tok");
        let api = client(&transport, &tokens);

        assert_eq!(check_session(&api).await, GateState::Invalid);
        assert!(tokens.get().is_none());
    }

    #[tokio::test]
    async fn test_public_gate_redirects_valid_session() {
        let transport = MockTransport::new().respond(200, "{}");
        let tokens = MemoryTokenStore::with_token("good");
        let api = client(&transport, &tokens);

        let state = check_session(&api).await;

        assert_eq!(state, GateState::Valid);
        assert_eq!(state.outcome(GateKind::Public), GateOutcome::Redirect);
        assert_eq!(state.outcome(GateKind::Protected), GateOutcome::Render);
        assert_eq!(tokens.get().as_deref(), Some("good"));
    }

    #[test]
    fn test_checking_never_renders() {
        assert_eq!(GateState::Checking.outcome(GateKind::Protected), GateOutcome::Loading);
        assert_eq!(GateState::Checking.outcome(GateKind::Public), GateOutcome::Loading);
    }
}
