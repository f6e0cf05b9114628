//! User record as seen through the user-directory collaborator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account in the external directory.
///
/// Only the fields this service needs are modeled; the directory owns the
/// full account record and its persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Stored phone number, in whatever format the user entered it
    pub phone: Option<String>,

    /// Whether the phone number has been verified
    pub phone_verified: bool,
}

impl DirectoryUser {
    /// Create a new unverified user record
    pub fn new(phone: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone,
            phone_verified: false,
        }
    }
}
