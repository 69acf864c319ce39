//! Account domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{
    MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MSG_EMAIL_REQUIRED, MSG_USERNAME_REQUIRED,
};
use crate::email::normalize_email;
use crate::error::{DomainError, DomainResult};
use crate::password::{Credential, Password};
use crate::principal::Principal;

/// Validated input for a new account.
///
/// Built through [`NewAccount::new`], which rejects a missing email or
/// username and normalizes the email domain.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewAccount {
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub first_name: String,
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub last_name: String,
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub username: String,
    #[validate(length(max = MAX_EMAIL_LENGTH))]
    pub email: String,
}

impl NewAccount {
    /// Check required fields, normalize the email and enforce column limits.
    ///
    /// # Errors
    /// `InvalidInput` when email or username is empty (email is checked
    /// first) or when a field exceeds its column length.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        username: impl Into<String>,
        email: &str,
    ) -> DomainResult<Self> {
        if email.is_empty() {
            return Err(DomainError::invalid_input(MSG_EMAIL_REQUIRED));
        }

        let username = username.into();
        if username.is_empty() {
            return Err(DomainError::invalid_input(MSG_USERNAME_REQUIRED));
        }

        let new = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            username,
            email: normalize_email(email),
        };

        new.validate()
            .map_err(|e| DomainError::invalid_input(e.to_string()))?;

        Ok(new)
    }
}

/// Account domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub password: Password,
    pub date_joined: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub is_admin: bool,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superadmin: bool,
}

impl Account {
    /// Create an unprivileged, inactive account from validated input.
    pub fn new(new: NewAccount, password: Password) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name: new.first_name,
            last_name: new.last_name,
            username: new.username,
            email: new.email,
            phone_number: String::new(),
            password,
            date_joined: now,
            last_login: now,
            is_admin: false,
            is_staff: false,
            is_active: false,
            is_superadmin: false,
        }
    }

    /// Raise every privilege flag at once.
    pub fn promote_to_superuser(&mut self) {
        self.is_admin = true;
        self.is_active = true;
        self.is_staff = true;
        self.is_superadmin = true;
    }

    pub fn is_superuser(&self) -> bool {
        self.is_admin && self.is_active && self.is_staff && self.is_superadmin
    }

    /// First and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn short_name(&self) -> &str {
        &self.first_name
    }

    pub fn record_login(&mut self, at: DateTime<Utc>) {
        self.last_login = at;
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.email)
    }
}

impl Credential for Account {
    fn set_password(&mut self, raw: Option<&str>) -> DomainResult<()> {
        self.password = Password::from_raw(raw)?;
        Ok(())
    }

    fn check_password(&self, raw: &str) -> bool {
        self.password.verify(raw)
    }

    fn has_usable_password(&self) -> bool {
        self.password.is_usable()
    }
}

// Coarse policy: any permission is granted to admins and nobody else, and
// module visibility is open to everyone.
impl Principal for Account {
    fn identifier(&self) -> &str {
        &self.email
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn has_permission(&self, _permission: &str) -> bool {
        self.is_admin
    }

    fn has_module_permission(&self, _module: &str) -> bool {
        true
    }
}

/// Account response (safe to print or return to a client)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub date_joined: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub is_admin: bool,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superadmin: bool,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            username: account.username.clone(),
            email: account.email.clone(),
            phone_number: account.phone_number.clone(),
            date_joined: account.date_joined,
            last_login: account.last_login,
            is_admin: account.is_admin,
            is_staff: account.is_staff,
            is_active: account.is_active,
            is_superadmin: account.is_superadmin,
        }
    }
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        AccountResponse::from(&account)
    }
}
