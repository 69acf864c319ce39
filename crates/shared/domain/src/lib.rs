//! Domain layer - Account entity, capabilities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Persistence lives in the account service.

pub mod account;
pub mod constants;
pub mod email;
pub mod error;
pub mod password;
pub mod principal;

pub use account::{Account, AccountResponse, NewAccount};
pub use constants::*;
pub use email::normalize_email;
pub use error::{DomainError, DomainResult};
pub use password::{Credential, Password};
pub use principal::Principal;
