//! The credential store contract.

use async_trait::async_trait;

use safevault_core::result::AppResult;
use safevault_entity::user::{NewUser, UserRecord};

/// Durable registry of user credentials.
///
/// Uniqueness and protected-record rules are enforced by implementations,
/// so callers cannot bypass them.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Exact, case-sensitive lookup.
    async fn get_by_username(&self, username: &str) -> AppResult<Option<UserRecord>>;

    /// All users. Order carries no meaning.
    async fn get_all(&self) -> AppResult<Vec<UserRecord>>;

    /// Sanitizes and validates `user`, then inserts it.
    ///
    /// Fails with `Validation` on empty username/hash or a malformed email,
    /// and with `Conflict` when the username is taken.
    async fn add(&self, user: NewUser) -> AppResult<UserRecord>;

    /// Removes a user.
    ///
    /// Fails with `NotFound` when absent and `ProtectedResource` when the
    /// record holds the `Admin` role.
    async fn delete(&self, username: &str) -> AppResult<()>;
}
