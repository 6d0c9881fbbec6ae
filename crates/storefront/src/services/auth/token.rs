//! Signed bearer tokens (HS256 JWT).

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use cotton_row_core::UserRole;

use super::TokenError;
use crate::config::JwtConfig;
use crate::models::SessionUser;

/// Claims carried by every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

/// Issues and verifies tokens with a single shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    issuer: String,
    lifetime: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("issuer", &self.issuer)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    #[must_use]
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            issuer: config.issuer.clone(),
            lifetime: Duration::days(config.expiry_days),
        }
    }

    /// Sign a token for `user`, valid for the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Encode` if signing fails.
    pub fn issue(&self, user: &SessionUser) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
            iss: self.issuer.clone(),
        };
        self.encode_claims(&claims)
    }

    /// Check signature, expiry, and issuer, and return the claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Expired` for an expired token and
    /// `TokenError::Invalid` for anything else that fails validation.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }

    fn encode_claims(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding).map_err(TokenError::Encode)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use cotton_row_core::UserId;

    use super::*;

    fn config(issuer: &str) -> JwtConfig {
        JwtConfig {
            secret: SecretString::from("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6%"),
            expiry_days: 30,
            issuer: issuer.to_string(),
        }
    }

    fn user() -> SessionUser {
        SessionUser {
            id: UserId::new("mock-user-id"),
            email: "ana@example.ph".to_string(),
            name: "Ana Cruz".to_string(),
            role: UserRole::Customer,
            avatar: None,
        }
    }

    #[test]
    fn test_issue_then_verify() {
        let tokens = TokenService::new(&config("cotton-row"));
        let token = tokens.issue(&user()).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.sub, "mock-user-id");
        assert_eq!(claims.email, "ana@example.ph");
        assert_eq!(claims.name, "Ana Cruz");
        assert_eq!(claims.role, UserRole::Customer);
        assert_eq!(claims.iss, "cotton-row");
        assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);
    }

    #[test]
    fn test_expired_token() {
        let tokens = TokenService::new(&config("cotton-row"));
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "mock-user-id".to_string(),
            email: "ana@example.ph".to_string(),
            name: "Ana Cruz".to_string(),
            role: UserRole::Customer,
            iat: now - 7200,
            exp: now - 3600,
            iss: "cotton-row".to_string(),
        };
        let token = tokens.encode_claims(&claims).unwrap();

        assert!(matches!(tokens.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_wrong_issuer_is_invalid() {
        let other = TokenService::new(&config("someone-else"));
        let token = other.issue(&user()).unwrap();

        let tokens = TokenService::new(&config("cotton-row"));
        assert!(matches!(tokens.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_garbage_is_invalid() {
        let tokens = TokenService::new(&config("cotton-row"));
        assert!(matches!(tokens.verify("not-a-token"), Err(TokenError::Invalid)));

        let mut token = tokens.issue(&user()).unwrap();
        token.push('x');
        assert!(matches!(tokens.verify(&token), Err(TokenError::Invalid)));
    }
}
