//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration (Supabase JWT)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Supabase project JWT secret (HS256)
    #[serde(default)]
    pub jwt_secret: String,

    /// Expected audience for tokens
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Accept an `X-User-Id` header as identity (local testing only)
    #[serde(default)]
    pub allow_user_id_header: bool,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("SUPABASE_JWT_SECRET"));
        }
        if self.audience.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_AUDIENCE"));
        }
        if *environment == Environment::Production && self.allow_user_id_header {
            return Err(ValidationError::UserIdHeaderInProduction);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            audience: default_audience(),
            allow_user_id_header: false,
        }
    }
}

fn default_audience() -> String {
    "authenticated".to_string()
}
