//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Column limits
// =============================================================================

/// Maximum length of first name, last name, username and phone number
pub const MAX_NAME_LENGTH: u64 = 50;

/// Maximum length of an email address
pub const MAX_EMAIL_LENGTH: u64 = 100;

// =============================================================================
// Credentials
// =============================================================================

/// Prefix marking a stored password that can never verify
pub const UNUSABLE_PASSWORD_PREFIX: &str = "!";

// =============================================================================
// Validation messages
// =============================================================================

pub const MSG_EMAIL_REQUIRED: &str = "User must have an email address";

pub const MSG_USERNAME_REQUIRED: &str = "User must have an username";
