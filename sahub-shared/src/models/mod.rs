/// Database models for sahub
///
/// This module contains the database models and their operations.
///
/// # Models
///
/// - `account`: Registered accounts (the credential store)
///
/// # Example
///
/// ```no_run
/// use sahub_shared::models::account::{Account, CreateAccount};
/// use sahub_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let account = Account::create(
///     &pool,
///     CreateAccount {
///         email: "user@example.com".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod account;
