//! Supabase adapter for JWT validation.
//!
//! Supabase signs access tokens with the project's JWT secret (HS256). This
//! adapter validates them locally, without calling the auth server:
//!
//! 1. Verify the HS256 signature against the shared secret
//! 2. Validate audience and expiry claims
//! 3. Map `sub` and `email` to the domain `AuthenticatedUser`
//!
//! # Example
//!
//! ```ignore
//! use payble::adapters::auth::{SupabaseConfig, SupabaseSessionValidator};
//!
//! let validator = SupabaseSessionValidator::new(SupabaseConfig::new(secret, "authenticated"));
//! let user = validator.validate("eyJ...").await?;
//! ```

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Configuration for the Supabase JWT adapter.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project JWT secret.
    pub jwt_secret: SecretString,

    /// Expected audience claim ("authenticated" for signed-in users).
    pub audience: String,
}

impl SupabaseConfig {
    pub fn new(jwt_secret: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            jwt_secret: SecretString::new(jwt_secret.into()),
            audience: audience.into(),
        }
    }

    pub fn from_app_config(config: &AuthConfig) -> Self {
        Self::new(&config.jwt_secret, &config.audience)
    }
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("audience", &self.audience)
            .finish_non_exhaustive()
    }
}

/// Claims carried by a Supabase access token.
#[derive(Debug, Serialize, Deserialize)]
struct SupabaseClaims {
    /// Subject - the user ID
    sub: String,

    /// Expiry timestamp (Unix epoch seconds)
    exp: i64,

    #[serde(default)]
    email: Option<String>,

    #[serde(default)]
    role: Option<String>,
}

/// Supabase session validator.
pub struct SupabaseSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SupabaseSessionValidator {
    pub fn new(config: SupabaseConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes()),
            validation,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<SupabaseClaims, AuthError> {
        decode::<SupabaseClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    ErrorKind::InvalidAudience => {
                        tracing::warn!("Invalid audience in token");
                        AuthError::InvalidToken
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Invalid token signature");
                        AuthError::InvalidToken
                    }
                    _ => {
                        tracing::debug!("Token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })
    }
}

#[async_trait]
impl SessionValidator for SupabaseSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;

        let user_id = UserId::new(claims.sub).map_err(|_| {
            tracing::warn!("Token has empty subject");
            AuthError::InvalidToken
        })?;
        let email = claims.email.filter(|e| !e.trim().is_empty());

        tracing::debug!(user_id = %user_id, role = ?claims.role, "Token validated");
        Ok(AuthenticatedUser::new(user_id, email))
    }
}
