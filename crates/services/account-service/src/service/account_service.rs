//! Account factory functions.
//!
//! Every function takes the store explicitly; there is no global manager.

use tracing::{info, warn};

use common::{AppResult, OptionExt};
use domain::{Account, Credential, NewAccount, Password};

use crate::repository::AccountRepository;

/// Validate input and build an unsaved account with a hashed password.
fn build_account(
    first_name: &str,
    last_name: &str,
    username: &str,
    email: &str,
    password: Option<&str>,
) -> AppResult<Account> {
    let new = NewAccount::new(first_name, last_name, username, email).map_err(|e| {
        warn!(error = %e, "Rejected account input");
        e
    })?;
    let password = Password::from_raw(password)?;

    Ok(Account::new(new, password))
}

/// Create and persist a standard account.
///
/// The email domain is normalized and only a salted hash of `password` is
/// stored. `None` stores an unusable password. All privilege flags start
/// out false.
///
/// # Errors
/// `InvalidInput` for an empty email or username, `UniquenessViolation`
/// when the store already holds the email or username.
pub async fn create_user(
    repo: &dyn AccountRepository,
    first_name: &str,
    last_name: &str,
    username: &str,
    email: &str,
    password: Option<&str>,
) -> AppResult<Account> {
    let account = build_account(first_name, last_name, username, email, password)?;

    let account = repo.persist(account).await?;
    info!(account_id = %account.id, email = %account.email, "Account created");

    Ok(account)
}

/// Create an account with all four privilege flags raised.
///
/// The flags are set before the single write, so a failed call never
/// leaves a standard account behind.
///
/// # Errors
/// Same as [`create_user`].
pub async fn create_superuser(
    repo: &dyn AccountRepository,
    first_name: &str,
    last_name: &str,
    username: &str,
    email: &str,
    password: Option<&str>,
) -> AppResult<Account> {
    let mut account = build_account(first_name, last_name, username, email, password)?;
    account.promote_to_superuser();

    let account = repo.persist(account).await?;
    info!(account_id = %account.id, email = %account.email, "Superuser created");

    Ok(account)
}

/// Replace the password of the account with the given login email.
pub async fn change_password(
    repo: &dyn AccountRepository,
    email: &str,
    password: Option<&str>,
) -> AppResult<Account> {
    let mut account = repo.find_by_email(email).await?.ok_or_not_found()?;
    account.set_password(password)?;

    let account = repo.persist(account).await?;
    info!(account_id = %account.id, "Password changed");

    Ok(account)
}

/// Activate or deactivate the account with the given login email.
pub async fn set_active(repo: &dyn AccountRepository, email: &str, active: bool) -> AppResult<Account> {
    let mut account = repo.find_by_email(email).await?.ok_or_not_found()?;
    if active {
        account.activate();
    } else {
        account.deactivate();
    }

    let account = repo.persist(account).await?;
    info!(account_id = %account.id, active, "Account activation changed");

    Ok(account)
}
