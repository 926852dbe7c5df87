/// Authentication utilities
///
/// This module provides the authentication primitives for sahub:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`service`]: The authentication service (registration + login)
///
/// # Security Features
///
/// - **Password Hashing**: Argon2id with 64 MB memory, 3 iterations
/// - **Constant-time Comparison**: Verification uses constant-time operations
/// - **Non-distinguishing Login Errors**: Unknown email and wrong password
///   produce the same error, so account existence is never leaked
///
/// # Example
///
/// ```no_run
/// use sahub_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
/// # Ok(())
/// # }
/// ```

pub mod password;
pub mod service;
