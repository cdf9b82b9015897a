//! Session resolution for the dashboard
//!
//! The viewer's session is modelled as a tagged union so the view layer can
//! match on it exhaustively:
//! - `Loading`: the provider is still resolving sessions
//! - `Unauthenticated`: resolution finished, nobody is signed in
//! - `Authenticated(user)`: resolution finished with an identity
//!
//! Providers are injected into the server state as `Arc<dyn AuthProvider>`.

use crate::config::AccountConfig;
use crate::core::error::SessionError;
use crate::entities::User;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Resolved authentication state of the current viewer
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Resolution still in progress
    #[default]
    Loading,

    /// No active session
    Unauthenticated,

    /// Active session with an identity
    Authenticated(User),
}

impl SessionState {
    /// Get the identity if the session is authenticated
    pub fn identity(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Loading | SessionState::Unauthenticated => None,
        }
    }

    /// Check if resolution is still in progress
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    /// Check if an identity is present
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Outcome of a successful sign-in
#[derive(Debug, Clone)]
pub struct SignedIn {
    /// Opaque session token to hand back to the client
    pub token: String,
    pub user: User,
}

/// Trait for authentication providers
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve the session carried by a token (if any)
    async fn resolve(&self, token: Option<&str>) -> Result<SessionState, SessionError>;

    /// Open a session for an email/password pair
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignedIn, SessionError>;

    /// End the session identified by `token`
    async fn sign_out(&self, token: &str) -> Result<(), SessionError>;
}

struct Account {
    password: String,
    user: User,
}

/// In-memory provider backed by the configured demo accounts
///
/// Sessions are random UUID tokens kept in memory; they do not survive a
/// restart. Each account holds at most one session: signing in again
/// replaces the previous token.
pub struct InMemoryAuthProvider {
    /// `None` while the account list is still loading
    accounts: RwLock<Option<HashMap<String, Account>>>,
    sessions: RwLock<HashMap<String, User>>,
}

impl InMemoryAuthProvider {
    /// Create a provider that is ready to resolve sessions
    pub fn new(accounts: &[AccountConfig]) -> Self {
        Self {
            accounts: RwLock::new(Some(Self::index_accounts(accounts))),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a provider whose account list has not been loaded yet
    ///
    /// Every `resolve` returns [`SessionState::Loading`] until
    /// [`finish_loading`](Self::finish_loading) is called.
    pub fn loading() -> Self {
        Self {
            accounts: RwLock::new(None),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Install the account list and end the loading phase
    pub async fn finish_loading(&self, accounts: &[AccountConfig]) {
        let mut guard = self.accounts.write().await;
        *guard = Some(Self::index_accounts(accounts));
        tracing::info!(accounts = accounts.len(), "session provider ready");
    }

    /// Check if the account list has been loaded
    pub async fn is_ready(&self) -> bool {
        self.accounts.read().await.is_some()
    }

    /// Number of open sessions
    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn index_accounts(accounts: &[AccountConfig]) -> HashMap<String, Account> {
        accounts
            .iter()
            .map(|account| {
                (
                    normalize_email(&account.email),
                    Account {
                        password: account.password.clone(),
                        user: account.to_user(),
                    },
                )
            })
            .collect()
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn resolve(&self, token: Option<&str>) -> Result<SessionState, SessionError> {
        if self.accounts.read().await.is_none() {
            return Ok(SessionState::Loading);
        }

        let Some(token) = token else {
            return Ok(SessionState::Unauthenticated);
        };

        let sessions = self.sessions.read().await;
        Ok(match sessions.get(token) {
            Some(user) => SessionState::Authenticated(user.clone()),
            None => SessionState::Unauthenticated,
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SignedIn, SessionError> {
        let user = {
            let accounts = self.accounts.read().await;
            let accounts = accounts.as_ref().ok_or(SessionError::NotReady)?;
            match accounts.get(&normalize_email(email)) {
                Some(account) if account.password == password => account.user.clone(),
                _ => return Err(SessionError::InvalidCredentials),
            }
        };

        let token = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, open| open.id != user.id);
        sessions.insert(token.clone(), user.clone());

        Ok(SignedIn { token, user })
    }

    async fn sign_out(&self, token: &str) -> Result<(), SessionError> {
        match self.sessions.write().await.remove(token) {
            Some(_) => Ok(()),
            None => Err(SessionError::UnknownSession {
                token: token.to_string(),
            }),
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
