/// Authentication service (registration + login)
///
/// This is the orchestration layer between the HTTP surface and the
/// credential store. It owns no state beyond the injected database pool:
/// every call is a stateless request/response, and duplicate-email races
/// between concurrent registrations are settled by the store's unique
/// constraint, not by any locking here.
///
/// The service is constructed once at startup with the pool handle and lives
/// in the shared application state.
///
/// # Example
///
/// ```no_run
/// use sahub_shared::auth::service::AuthService;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// let auth = AuthService::new(pool);
///
/// auth.register("user@example.com", "secret123").await?;
/// let email = auth.login("user@example.com", "secret123").await?;
/// assert_eq!(email, "user@example.com");
/// # Ok(())
/// # }
/// ```

use sqlx::PgPool;

use crate::auth::password::{self, PasswordError};
use crate::models::account::{Account, CreateAccount, StoreError};

/// Error type for authentication operations
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A required field is missing or empty
    #[error("Email and password required")]
    MissingField,

    /// Registration attempted with an email that already has an account
    #[error("Email already exists")]
    AlreadyExists,

    /// Login failed. Unknown email and wrong password collapse into this one
    /// variant so the response never reveals whether an account exists.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Credential store failure
    #[error("credential store failure: {0}")]
    Store(#[source] StoreError),

    /// Password hashing or verification failure
    #[error("password operation failed: {0}")]
    Password(#[from] PasswordError),
}

/// Authentication service over the credential store
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
}

impl AuthService {
    /// Creates a new service with an injected store handle
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Registers a new account
    ///
    /// Both fields must be present and non-empty. The password is hashed
    /// here, before the store is called, so the store only ever receives the
    /// hash. Returns no sensitive data on success.
    ///
    /// # Errors
    ///
    /// - `AuthError::MissingField` if email or password is empty
    /// - `AuthError::AlreadyExists` if the email is already registered
    /// - `AuthError::Store` / `AuthError::Password` on unexpected failure
    pub async fn register(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingField);
        }

        let password_hash = password::hash_password(password)?;

        match Account::create(
            &self.db,
            CreateAccount {
                email: email.to_string(),
                password_hash,
            },
        )
        .await
        {
            Ok(account) => {
                tracing::info!(account_id = %account.id, "account registered");
                Ok(())
            }
            Err(StoreError::DuplicateEmail) => Err(AuthError::AlreadyExists),
            Err(e) => Err(AuthError::Store(e)),
        }
    }

    /// Authenticates an account by email and password
    ///
    /// Returns the account's email on success. No token or session is
    /// issued.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown email AND for a
    /// wrong password — the two cases are deliberately indistinguishable.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let account = Account::find_by_email(&self.db, email)
            .await
            .map_err(AuthError::Store)?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = password::verify_password(password, &account.password_hash)?;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(account_id = %account.id, "login succeeded");
        Ok(account.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        assert_eq!(
            AuthError::MissingField.to_string(),
            "Email and password required"
        );
        assert_eq!(AuthError::AlreadyExists.to_string(), "Email already exists");
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }

    // Database-backed register/login flows are exercised end-to-end in
    // sahub-api/tests/integration_test.rs
}
