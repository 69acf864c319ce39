//! Account repository: the backing store for account records.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use common::AppResult;
use domain::Account;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
///
/// `persist` is the only write path. Uniqueness of `username` and `email`
/// is enforced by the store and reported as `UniquenessViolation`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert the account, or update it when its id is already stored
    async fn persist(&self, account: Account) -> AppResult<Account>;

    /// Find account by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;

    /// Find account by its login field (exact match)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Find account by username (exact match)
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;

    /// List all accounts, oldest first
    async fn list(&self) -> AppResult<Vec<Account>>;
}

/// SeaORM implementation of AccountRepository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn persist(&self, account: Account) -> AppResult<Account> {
        let exists = AccountEntity::find_by_id(account.id)
            .one(&self.db)
            .await?
            .is_some();

        let active = ActiveModel::from(&account);
        let model = if exists {
            tracing::debug!(account_id = %account.id, "Updating account");
            active.update(&self.db).await?
        } else {
            tracing::debug!(account_id = %account.id, "Inserting account");
            active.insert(&self.db).await?
        };

        Ok(Account::from(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        let result = AccountEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Account::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(Account::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(result.map(Account::from))
    }

    async fn list(&self) -> AppResult<Vec<Account>> {
        let models = AccountEntity::find()
            .order_by_asc(account::Column::DateJoined)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Account::from).collect())
    }
}
