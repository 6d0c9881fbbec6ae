//! Authentication service.
//!
//! Register and login only check the shape of their input and then issue a
//! token for a synthetic user. No credential store is consulted.

mod error;
pub mod token;

pub use error::{AuthError, TokenError};
pub use token::{Claims, TokenService};

use cotton_row_core::{Email, UserId, UserRole};

use crate::models::SessionUser;

/// Minimum password length, in characters.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Id given to every stub user.
pub const STUB_USER_ID: &str = "mock-user-id";

/// Display name used for logins, which carry no name of their own.
pub const STUB_USER_NAME: &str = "Mock User";

/// A successful register or login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: SessionUser,
    pub token: String,
}

/// Authentication service.
pub struct AuthService<'a> {
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    #[must_use]
    pub const fn new(tokens: &'a TokenService) -> Self {
        Self { tokens }
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if any field is absent or empty.
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    pub fn register(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        name: Option<&str>,
    ) -> Result<AuthSession, AuthError> {
        const REQUIRED: &str = "email, password, and name";

        let (Some(email), Some(password), Some(name)) =
            (present(email), present(password), present(name))
        else {
            return Err(AuthError::MissingFields(REQUIRED));
        };

        let email = Email::parse(email)?;
        validate_password(password)?;

        self.start_session(stub_user(email.into_inner(), name.to_string()))
    }

    /// Log in. Any non-empty email and password are accepted; the email is
    /// echoed back without a shape check.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if either field is absent or empty.
    pub fn login(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<AuthSession, AuthError> {
        const REQUIRED: &str = "email and password";

        let (Some(email), Some(_password)) = (present(email), present(password)) else {
            return Err(AuthError::MissingFields(REQUIRED));
        };

        self.start_session(stub_user(email.to_string(), STUB_USER_NAME.to_string()))
    }

    /// Resolve the user a bearer token was issued to.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Token` if the token is expired or invalid.
    pub fn current_user(&self, token: &str) -> Result<SessionUser, AuthError> {
        let claims = self.tokens.verify(token)?;

        Ok(SessionUser {
            id: UserId::new(claims.sub),
            email: claims.email,
            name: claims.name,
            role: claims.role,
            avatar: None,
        })
    }

    fn start_session(&self, user: SessionUser) -> Result<AuthSession, AuthError> {
        let token = self.tokens.issue(&user)?;
        Ok(AuthSession { user, token })
    }
}

/// `Some` only for non-empty values.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn stub_user(email: String, name: String) -> SessionUser {
    SessionUser {
        id: UserId::new(STUB_USER_ID),
        email,
        name,
        role: UserRole::Customer,
        avatar: None,
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}
