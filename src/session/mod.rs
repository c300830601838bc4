//! Session lifecycle on top of an [`IdentityProvider`].

mod identity;

pub use identity::*;

use tracing::{info, instrument, warn};

use crate::domain::Session;

/// Establishes and tears down the authenticated session.
///
/// The controller owns the [`Session`]; consumers get a reference through
/// [`SessionController::session`] and are expected to drop whatever they
/// built from it after [`SessionController::logout`].
pub struct SessionController<P: IdentityProvider> {
    provider: P,
    options: LoginOptions,
    session: Session,
}

impl<P: IdentityProvider> SessionController<P> {
    pub fn new(provider: P, options: LoginOptions) -> Self {
        Self {
            provider,
            options,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Adopts a still-valid session from the provider. Failures are silent.
    #[instrument(skip(self))]
    pub async fn initialize(&mut self) -> &Session {
        if self.provider.is_authenticated().await {
            self.adopt_identity().await;
        } else {
            info!("No existing session");
        }
        &self.session
    }

    /// Runs the provider's login flow. Returns whether a session was established.
    #[instrument(skip(self), fields(provider = %self.options.identity_provider))]
    pub async fn login(&mut self) -> bool {
        match self.provider.login(&self.options).await {
            Some(principal) => {
                info!(%principal, "Session established");
                self.session = Session::authenticated(principal);
                true
            }
            None => {
                info!("Login did not complete");
                false
            }
        }
    }

    /// Ends the session. Local state is cleared regardless of the provider.
    #[instrument(skip(self))]
    pub async fn logout(&mut self) {
        self.provider.logout().await;
        self.session = Session::default();
        info!("Logged out");
    }

    async fn adopt_identity(&mut self) {
        match self.provider.identity().await {
            Some(principal) => {
                info!(%principal, "Session established");
                self.session = Session::authenticated(principal);
            }
            None => warn!("Provider reported a session without an identity"),
        }
    }
}
