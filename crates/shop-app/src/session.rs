use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Store, Default, Debug, Clone)]
pub struct SessionState {
    pub token: Option<String>,
    pub email: Option<String>,
}

/// The signed-in shopper, consulted by the access guard.
/// Token issuance and validation belong to the backend.
#[derive(Clone, Copy)]
pub struct Session(Store<SessionState>);

impl Default for Session {
    fn default() -> Self {
        Self(Store::new(SessionState::default()))
    }
}

impl Session {
    /// Creates the session and makes it available to every page below.
    pub fn provide() -> Self {
        let session = Self::default();
        provide_context(session);
        session
    }

    pub fn use_context() -> Option<Self> {
        use_context::<Self>()
    }

    /// The provided session, or a signed-out one when rendered outside `App`.
    pub fn current() -> Self {
        Self::use_context().unwrap_or_else(|| {
            log::warn!("no session in context, treating the visitor as signed out");
            Self::default()
        })
    }

    pub fn is_signed_in(&self) -> bool {
        self.0.token().with(Option::is_some)
    }

    pub fn email(&self) -> Option<String> {
        self.0.email().get()
    }

    pub fn sign_in(&self, email: impl Into<String>, token: impl Into<String>) {
        let email = email.into();
        log::info!("signed in as {email}");
        self.0.email().set(Some(email));
        self.0.token().set(Some(token.into()));
    }

    pub fn sign_out(&self) {
        log::info!("signed out");
        self.0.token().set(None);
        self.0.email().set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out() {
        Owner::new().with(|| {
            let session = Session::default();
            assert!(!session.is_signed_in());

            session.sign_in("ada@example.com", "token-1");
            assert!(session.is_signed_in());
            assert_eq!(session.email().as_deref(), Some("ada@example.com"));

            session.sign_out();
            assert!(!session.is_signed_in());
            assert_eq!(session.email(), None);
        });
    }

    #[test]
    fn test_current_reads_the_provided_session() {
        Owner::new().with(|| {
            let provided = Session::provide();
            provided.sign_in("ada@example.com", "token-1");
            assert!(Session::current().is_signed_in());
        });
    }

    #[test]
    fn test_current_without_provider_is_signed_out() {
        Owner::new().with(|| {
            let session = Session::current();
            assert!(!session.is_signed_in());
            assert_eq!(session.email(), None);
        });
    }
}
