//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::entities::{
    AuthSession, AuthUser, Credentials, Post, SignUpOutcome, User, UserId,
};
use crate::domain::ports::{IdentityProvider, PostRepository, UserRepository};
use crate::error::{DomainError, IdentityError};

// ============================================================================
// In-Memory Post Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
    last_limit: Arc<RwLock<Option<u64>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with posts for testing
    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        self.posts.write().unwrap().extend(posts);
        self
    }

    /// The limit passed to the most recent `list_published` call
    pub fn last_limit(&self) -> Option<u64> {
        *self.last_limit.read().unwrap()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_published(&self, limit: u64) -> Result<Vec<Post>, DomainError> {
        *self.last_limit.write().unwrap() = Some(limit);

        let posts = self.posts.read().unwrap();
        let mut published: Vec<Post> = posts.iter().filter(|p| p.is_published).cloned().collect();
        published.sort_by(Post::recency_cmp);
        published.truncate(limit as usize);

        Ok(published)
    }
}

// ============================================================================
// Failing Post Repository
// ============================================================================

/// A post source that is down or too slow
pub enum FailingPostRepository {
    Unavailable,
    Stalled(Duration),
}

impl FailingPostRepository {
    pub fn unavailable() -> Self {
        Self::Unavailable
    }

    pub fn stalled(delay: Duration) -> Self {
        Self::Stalled(delay)
    }
}

#[async_trait]
impl PostRepository for FailingPostRepository {
    async fn list_published(&self, _limit: u64) -> Result<Vec<Post>, DomainError> {
        match self {
            Self::Unavailable => Err(DomainError::SourceUnavailable(
                "connection refused".to_string(),
            )),
            Self::Stalled(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(Vec::new())
            }
        }
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.users.write().unwrap().insert(user.id, user);
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.get(id).cloned())
    }
}

// ============================================================================
// Mock Identity Provider
// ============================================================================

#[derive(Default)]
pub struct MockIdentityProvider {
    /// email -> (account, password)
    accounts: Arc<RwLock<HashMap<String, (AuthUser, String)>>>,
    /// access token -> account id
    sessions: Arc<RwLock<HashMap<String, String>>>,
    calls: AtomicUsize,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls that reached the provider
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn issue_session(&self, user: &AuthUser) -> AuthSession {
        let access_token = format!("access-{}", uuid::Uuid::new_v4());
        self.sessions
            .write()
            .unwrap()
            .insert(access_token.clone(), user.id.clone());

        AuthSession {
            access_token,
            refresh_token: format!("refresh-{}", uuid::Uuid::new_v4()),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            user: user.clone(),
        }
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn sign_up(
        &self,
        credentials: &Credentials,
        _redirect_url: Option<&str>,
    ) -> Result<SignUpOutcome, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut accounts = self.accounts.write().unwrap();
        if accounts.contains_key(&credentials.email) {
            return Err(IdentityError::Api {
                status: 422,
                message: "User already registered".to_string(),
            });
        }

        let user = AuthUser {
            id: uuid::Uuid::new_v4().to_string(),
            email: Some(credentials.email.clone()),
            created_at: Some(Utc::now()),
            email_confirmed_at: None,
        };
        accounts.insert(
            credentials.email.clone(),
            (user.clone(), credentials.password.clone()),
        );

        Ok(SignUpOutcome {
            user,
            session: None,
        })
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let user = {
            let accounts = self.accounts.read().unwrap();
            match accounts.get(&credentials.email) {
                Some((user, password)) if *password == credentials.password => user.clone(),
                _ => return Err(IdentityError::InvalidCredentials),
            }
        };

        Ok(self.issue_session(&user))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.sessions.write().unwrap().remove(access_token) {
            Some(_) => Ok(()),
            None => Err(IdentityError::Unauthorized),
        }
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let user_id = self
            .sessions
            .read()
            .unwrap()
            .get(access_token)
            .cloned()
            .ok_or(IdentityError::Unauthorized)?;

        let accounts = self.accounts.read().unwrap();
        accounts
            .values()
            .find(|(u, _)| u.id == user_id)
            .map(|(u, _)| u.clone())
            .ok_or(IdentityError::Unauthorized)
    }
}
