//! Account Service Library
//!
//! Account model, its backing store, and the factory functions that create
//! standard accounts and superusers. Used by the `account-service` CLI and
//! embeddable in any host application.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use tracing::info;

use crate::config::AccountServiceConfig;
use crate::infra::Database;
use crate::repository::AccountStore;

/// Connect to the configured database, apply migrations and build the store.
pub async fn connect_store(config: &AccountServiceConfig) -> Result<AccountStore, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    Ok(AccountStore::new(db.get_connection()))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &AccountServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
