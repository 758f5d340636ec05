//! # Bearer-Token Guard
//!
//! Stateless JWT validation for the API. Every endpoint requires an
//! authenticated caller; validation needs no store lookup. Token issuing
//! is an operator concern (`salesboard token`), not an API endpoint —
//! full session handling lives outside this service.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication failures; all map to 401
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Not authorized, no token")]
    MissingToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// JWT claims for access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (caller identity)
    pub sub: String,

    /// Issued at (Unix epoch seconds)
    pub iat: i64,

    /// Expiration (Unix epoch seconds)
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

/// Auth configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// When false, requests are served without a token (development)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// HS256 signing secret
    #[serde(default = "default_secret")]
    pub secret: String,

    /// Token lifetime in hours
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,

    /// Issuer identifier
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

fn default_enabled() -> bool {
    true
}

fn default_secret() -> String {
    "CHANGE_THIS_SECRET_IN_PRODUCTION".to_string()
}

fn default_token_ttl_hours() -> i64 {
    24
}

fn default_issuer() -> String {
    "salesboard".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            secret: default_secret(),
            token_ttl_hours: default_token_ttl_hours(),
            issuer: default_issuer(),
        }
    }
}

/// Token issuing and validation
#[derive(Clone)]
pub struct TokenManager {
    config: AuthConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenManager {
    pub fn new(config: AuthConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Whether requests must carry a valid token
    pub fn required(&self) -> bool {
        self.config.enabled
    }

    /// Issue an access token for the given subject
    pub fn issue(&self, subject: &str) -> AuthResult<String> {
        let now = Utc::now();
        let exp = now + Duration::hours(self.config.token_ttl_hours);

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenGenerationFailed)
    }

    /// Validate a token and extract its claims
    pub fn validate(&self, token: &str) -> AuthResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::MalformedToken,
            }
        })?;

        Ok(data.claims)
    }

    /// Validate the `Authorization: Bearer <token>` header value, if
    /// auth is enabled. Returns the caller's claims, or `None` when
    /// auth is disabled.
    pub fn authorize(&self, authorization: Option<&str>) -> AuthResult<Option<Claims>> {
        if !self.config.enabled {
            return Ok(None);
        }

        let token = authorization
            .and_then(|h| h.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;

        Ok(Some(self.validate(token)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> TokenManager {
        TokenManager::new(AuthConfig::default())
    }

    #[test]
    fn test_issue_and_validate_round_trip() {
        let manager = manager();
        let token = manager.issue("ops").unwrap();
        let claims = manager.validate(&token).unwrap();
        assert_eq!(claims.sub, "ops");
        assert_eq!(claims.iss, "salesboard");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = manager().issue("ops").unwrap();

        let other = TokenManager::new(AuthConfig {
            secret: "different".to_string(),
            ..AuthConfig::default()
        });
        assert!(matches!(
            other.validate(&token),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_authorize_requires_bearer_prefix() {
        let manager = manager();
        assert!(matches!(
            manager.authorize(None),
            Err(AuthError::MissingToken)
        ));
        assert!(matches!(
            manager.authorize(Some("Token abc")),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn test_disabled_auth_allows_anonymous() {
        let manager = TokenManager::new(AuthConfig {
            enabled: false,
            ..AuthConfig::default()
        });
        assert!(manager.authorize(None).unwrap().is_none());
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        assert!(matches!(
            manager().validate("not.a.token"),
            Err(AuthError::MalformedToken)
        ));
    }
}
