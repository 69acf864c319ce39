//! Service layer: account creation and maintenance.

mod account_service;

pub use account_service::{change_password, create_superuser, create_user, set_active};
