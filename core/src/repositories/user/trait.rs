//! User-directory trait defining the interface to the account datastore.
//!
//! The directory is an external collaborator: it owns account persistence,
//! query semantics, and authentication-token verification. This service
//! only passes the raw bearer value through and never inspects token
//! contents.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::DirectoryUser;
use crate::errors::DomainError;

/// Directory operations consumed after a successful code verification
///
/// Implementations resolve users and flip the phone-verified flag; how
/// they store accounts or validate tokens is entirely their concern.
#[async_trait]
pub trait UserDirectoryTrait: Send + Sync {
    /// Resolve the user a bearer token belongs to
    ///
    /// # Arguments
    /// * `token` - The raw bearer value from the Authorization header
    ///
    /// # Returns
    /// * `Ok(Some(DirectoryUser))` - Token resolved to a user
    /// * `Ok(None)` - Token unknown, expired, or otherwise unusable
    /// * `Err(DomainError)` - Directory failure
    async fn find_by_auth_token(&self, token: &str) -> Result<Option<DirectoryUser>, DomainError>;

    /// Mark the given user's phone number as verified
    ///
    /// # Arguments
    /// * `user_id` - The UUID of the user
    ///
    /// # Returns
    /// * `Ok(())` - Flag persisted
    /// * `Err(DomainError)` - User missing or directory failure
    async fn mark_phone_verified(&self, user_id: Uuid) -> Result<(), DomainError>;

    /// Find a user whose stored phone matches any of `variants` and mark
    /// that user's phone as verified
    ///
    /// The variants come from best-effort phone expansion, so this may
    /// match a record the caller did not intend when two accounts store
    /// ambiguous forms of the same digits.
    ///
    /// # Arguments
    /// * `variants` - Alternative representations of one phone number
    ///
    /// # Returns
    /// * `Ok(Some(DirectoryUser))` - A matching user was found and updated
    /// * `Ok(None)` - No stored phone matched any variant
    /// * `Err(DomainError)` - Directory failure
    async fn find_and_mark_phone_verified(
        &self,
        variants: &[String],
    ) -> Result<Option<DirectoryUser>, DomainError>;
}
