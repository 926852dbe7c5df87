/// Account model and credential store operations
///
/// One row per registered account. The email column carries a unique
/// constraint, which is the single arbiter of duplicate registrations:
/// concurrent inserts of the same email race at the database, and exactly one
/// wins. Emails are stored case-sensitively, with no normalization.
///
/// The store is intentionally narrow: accounts are created once and looked up
/// by email. There are no update or delete operations.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE accounts (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     email TEXT NOT NULL UNIQUE,
///     password_hash VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Error type for credential store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The email is already registered (unique constraint violation)
    #[error("email already registered")]
    DuplicateEmail,

    /// Any other database failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// A registered account
///
/// Passwords are stored as Argon2id hashes, never in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID (UUID v4)
    pub id: Uuid,

    /// Email address, unique and case-sensitive as stored
    pub email: String,

    /// Argon2id password hash (PHC string format)
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new account
///
/// `password_hash` must already be hashed; the store never sees plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Email address
    pub email: String,

    /// Argon2id password hash (NOT the plaintext password!)
    pub password_hash: String,
}

impl Account {
    /// Creates a new account
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateEmail` if the email already exists, or
    /// `StoreError::Database` for any other failure.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use sahub_shared::models::account::{Account, CreateAccount, StoreError};
    /// # use sqlx::PgPool;
    /// # async fn example(pool: PgPool) -> Result<(), StoreError> {
    /// let account = Account::create(
    ///     &pool,
    ///     CreateAccount {
    ///         email: "user@example.com".to_string(),
    ///         password_hash: "$argon2id$...".to_string(),
    ///     },
    /// )
    /// .await?;
    /// println!("Created account: {}", account.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(pool: &PgPool, data: CreateAccount) -> Result<Self, StoreError> {
        let result = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(data.email)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await;

        match result {
            Ok(account) => Ok(account),
            Err(sqlx::Error::Database(db_err))
                if db_err.constraint().is_some_and(|c| c.contains("email")) =>
            {
                Err(StoreError::DuplicateEmail)
            }
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    /// Finds an account by email address
    ///
    /// Lookup is exact-match: the stored email is case-sensitive.
    ///
    /// # Returns
    ///
    /// The account if found, `None` otherwise
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }
}
