use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Symmetric key used to sign and verify tokens.
///
/// Built once from configuration at startup. Never printed.
#[derive(Clone)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    pub fn new(secret: impl Into<String>) -> AuthResult<Self> {
        let secret = secret.into();

        if secret.trim().is_empty() {
            return Err(AuthError::MissingSecret);
        }

        Ok(Self(secret.into_bytes()))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(**redacted**)")
    }
}
