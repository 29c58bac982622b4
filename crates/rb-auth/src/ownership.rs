//! Ownership authorization guard.
//!
//! A pure decision function: no state, no I/O. Callers resolve the
//! resource first (not-found is the repository's answer, not ours) and
//! then ask whether the verified identity may touch it. For categories
//! the owner id is resolved transitively through the parent recipe.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny,
}

impl Access {
    /// ALLOW iff the requesting identity created the resource.
    pub fn check(requester_id: i64, resource_owner_id: i64) -> Self {
        if requester_id == resource_owner_id {
            Access::Allow
        } else {
            Access::Deny
        }
    }

    pub fn is_allowed(self) -> bool {
        self == Access::Allow
    }
}

/// Fallible form of [`Access::check`] for handler pipelines: DENY
/// becomes `AuthError::NotOwner`.
#[track_caller]
pub fn authorize(requester_id: i64, resource_owner_id: i64) -> AuthErrorResult<()> {
    match Access::check(requester_id, resource_owner_id) {
        Access::Allow => Ok(()),
        Access::Deny => Err(AuthError::NotOwner {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
