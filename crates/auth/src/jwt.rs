//! JWT token generation and validation

use std::time::{SystemTime, UNIX_EPOCH};

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};
use crate::secret::SigningSecret;

/// Lifetime of an issued token, also used as the cookie max-age.
pub const TOKEN_LIFETIME_SECS: u64 = 5 * 60;

/// Verified user reference carried inside a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
}

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize, Clone)]
pub(crate) struct Claims {
    authorized: bool,
    /// User ID
    id: String,
    email: String,
    /// Expiration timestamp (Unix seconds)
    exp: u64,
}

#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// Signs identities into tokens and verifies them back.
///
/// Both keys come from the same [`SigningSecret`], so one codec instance
/// should be shared by whoever issues and whoever verifies.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // exp is checked by decode_at against the caller's clock
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Generate a token for `identity` expiring [`TOKEN_LIFETIME_SECS`] from now
    pub fn encode(&self, identity: &Identity) -> AuthResult<String> {
        self.encode_at(identity, unix_now()?)
    }

    pub fn encode_at(&self, identity: &Identity, now: u64) -> AuthResult<String> {
        let exp = now
            .checked_add(TOKEN_LIFETIME_SECS)
            .ok_or_else(|| AuthError::Clock(format!("expiry overflows for now={now}")))?;

        let claims = Claims {
            authorized: true,
            id: identity.user_id.to_owned(),
            email: identity.email.to_owned(),
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(AuthError::Signing)
    }

    /// Validate a token and extract the identity it carries
    pub fn decode(&self, token: &str) -> AuthResult<Identity> {
        self.decode_at(token, unix_now()?)
    }

    pub fn decode_at(&self, token: &str, now: u64) -> AuthResult<Identity> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        check_algorithm(token)?;

        let token_data =
            decode::<Claims>(token, &self.decoding, &self.validation).map_err(rejection)?;
        let claims = token_data.claims;

        if !claims.authorized {
            return Err(AuthError::InvalidClaims);
        }

        if claims.exp <= now {
            return Err(AuthError::Expired);
        }

        Ok(Identity {
            user_id: claims.id,
            email: claims.email,
        })
    }
}

/// Rejects anything outside the HMAC family before the signature is looked at.
fn check_algorithm(token: &str) -> AuthResult<()> {
    let mut segments = token.split('.');
    let (Some(header), Some(_), Some(_), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(AuthError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|_| AuthError::Malformed)?;
    let header: RawHeader = serde_json::from_slice(&bytes).map_err(|_| AuthError::Malformed)?;

    match header.alg.as_str() {
        "HS256" | "HS384" | "HS512" => Ok(()),
        _ => Err(AuthError::AlgorithmMismatch(header.alg)),
    }
}

fn rejection(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims,
        _ => AuthError::Malformed,
    }
}

fn unix_now() -> AuthResult<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .map_err(|e| AuthError::Clock(format!("failed to get current time: {e}")))
}
