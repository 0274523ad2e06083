//! In-memory user repository implementation.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::user::{User, UserRepository};

/// [`UserRepository`] keeping accounts in process memory, keyed by email.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty [`InMemoryUserRepository`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users.
    ///
    /// Later users override earlier ones sharing the same email.
    pub fn with_users(users: Vec<User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.email.clone(), user))
            .collect();

        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, ctx: &Context, user: &User) -> Result<()> {
        ctx.run(async {
            let mut users = self.users.write().await;

            match users.entry(user.email.clone()) {
                Entry::Occupied(_) => {
                    tracing::debug!("user already exists");
                    Err(Error::Conflict)
                },
                Entry::Vacant(entry) => {
                    entry.insert(user.clone());
                    Ok(())
                },
            }
        })
        .await
        .inspect_err(log_context_failure)
    }

    async fn update_user(&self, ctx: &Context, user: &User) -> Result<()> {
        ctx.run(async {
            let mut users = self.users.write().await;

            match users.get_mut(&user.email) {
                Some(stored) => {
                    stored.metadata = user.metadata.clone();
                    Ok(())
                },
                None => {
                    tracing::debug!("user not found");
                    Err(Error::NotFound)
                },
            }
        })
        .await
        .inspect_err(log_context_failure)
    }

    async fn retrieve_by_id(&self, ctx: &Context, email: &str) -> Result<User> {
        ctx.run(async {
            match self.users.read().await.get(email) {
                Some(user) => Ok(user.clone()),
                None => {
                    tracing::debug!("user not found");
                    Err(Error::NotFound)
                },
            }
        })
        .await
        .inspect_err(log_context_failure)
    }

    async fn update_password(
        &self,
        ctx: &Context,
        email: &str,
        password: &str,
    ) -> Result<()> {
        ctx.run(async {
            let mut users = self.users.write().await;

            match users.get_mut(email) {
                Some(stored) => {
                    stored.password = password.to_owned();
                    Ok(())
                },
                None => {
                    tracing::debug!("user not found");
                    Err(Error::NotFound)
                },
            }
        })
        .await
        .inspect_err(log_context_failure)
    }
}

fn log_context_failure(err: &Error) {
    if let Error::Internal { details, .. } = err {
        tracing::warn!(%details, "user repository operation aborted");
    }
}
