use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::Principal;

/// Options for an interactive login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOptions {
    /// URL of the identity provider's login page.
    pub identity_provider: String,
}

/// The external identity provider a session is established against.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Whether a previously established session is still valid.
    async fn is_authenticated(&self) -> bool;

    /// Runs the login flow. `None` means the flow never reported success.
    async fn login(&self, options: &LoginOptions) -> Option<Principal>;

    async fn logout(&self);

    /// The identity of the current session, if any.
    async fn identity(&self) -> Option<Principal>;
}

#[derive(Debug, Default)]
struct ProviderState {
    active: Option<Principal>,
    grant: Option<Principal>,
    login_attempts: Vec<LoginOptions>,
}

/// Identity provider that lives in process memory.
///
/// Login hands out a fixed principal, or fails when built with
/// [`InMemoryIdentityProvider::declining`].
#[derive(Debug, Default)]
pub struct InMemoryIdentityProvider {
    state: Mutex<ProviderState>,
}

impl InMemoryIdentityProvider {
    pub fn approving(principal: Principal) -> Self {
        Self {
            state: Mutex::new(ProviderState {
                grant: Some(principal),
                ..ProviderState::default()
            }),
        }
    }

    pub fn declining() -> Self {
        Self::default()
    }

    /// Starts with a session that is already valid, as if restored from a previous run.
    pub fn with_existing_session(self, principal: Principal) -> Self {
        let mut state = self.state.into_inner();
        state.active = Some(principal);
        Self { state: Mutex::new(state) }
    }

    pub async fn login_attempts(&self) -> Vec<LoginOptions> {
        self.state.lock().await.login_attempts.clone()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn is_authenticated(&self) -> bool {
        self.state.lock().await.active.is_some()
    }

    async fn login(&self, options: &LoginOptions) -> Option<Principal> {
        let mut state = self.state.lock().await;
        state.login_attempts.push(options.clone());
        debug!(
            provider = %options.identity_provider,
            granted = state.grant.is_some(),
            "Login flow finished"
        );
        state.active = state.grant.clone();
        state.active.clone()
    }

    async fn logout(&self) {
        self.state.lock().await.active = None;
    }

    async fn identity(&self) -> Option<Principal> {
        self.state.lock().await.active.clone()
    }
}
