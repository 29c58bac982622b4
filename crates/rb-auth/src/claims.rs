use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims carried by every issued token. The token is a stateless,
/// self-contained capsule: validity is recomputed from the signature and
/// the embedded `exp` on each verification, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (numeric user id, stringified)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.parse::<i64>().is_err() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub must be a numeric user id".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Numeric user id embedded in the token.
    ///
    /// Only meaningful after `validate()`; parse failures map to the
    /// same `InvalidClaim` error either way.
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<i64> {
        self.sub.parse::<i64>().map_err(|_| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: "sub must be a numeric user id".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
