//! User persistence port.

use async_trait::async_trait;

use crate::context::Context;
use crate::error::Result;
use crate::user::User;

/// Account persistence API.
///
/// Implementations do not have to validate users: callers run
/// [`User::validate`] first. Every call must honor `ctx` for cancellation
/// and deadline, and concurrent calls for the same email must be
/// serialized so that email stays unique.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user account.
    ///
    /// Fails with [`Error::Conflict`](crate::error::Error::Conflict) if the
    /// email is already taken.
    async fn save(&self, ctx: &Context, user: &User) -> Result<()>;

    /// Update the metadata of an existing user.
    async fn update_user(&self, ctx: &Context, user: &User) -> Result<()>;

    /// Retrieve a user by its unique identifier, the email.
    async fn retrieve_by_id(&self, ctx: &Context, email: &str) -> Result<User>;

    /// Update the password of the user owning `email`.
    async fn update_password(
        &self,
        ctx: &Context,
        email: &str,
        password: &str,
    ) -> Result<()>;
}
