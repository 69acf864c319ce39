//! Account database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{Account, Password};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone_number: String,
    /// Argon2 PHC string or unusable marker, never plain text
    pub password: String,
    pub date_joined: DateTimeUtc,
    pub last_login: DateTimeUtc,
    pub is_admin: bool,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superadmin: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Account {
    fn from(model: Model) -> Self {
        Account {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            username: model.username,
            email: model.email,
            phone_number: model.phone_number,
            password: Password::from_hash(model.password),
            date_joined: model.date_joined,
            last_login: model.last_login,
            is_admin: model.is_admin,
            is_staff: model.is_staff,
            is_active: model.is_active,
            is_superadmin: model.is_superadmin,
        }
    }
}

/// Every column set, so the same model serves insert and update
impl From<&Account> for ActiveModel {
    fn from(account: &Account) -> Self {
        ActiveModel {
            id: Set(account.id),
            first_name: Set(account.first_name.clone()),
            last_name: Set(account.last_name.clone()),
            username: Set(account.username.clone()),
            email: Set(account.email.clone()),
            phone_number: Set(account.phone_number.clone()),
            password: Set(account.password.as_str().to_string()),
            date_joined: Set(account.date_joined),
            last_login: Set(account.last_login),
            is_admin: Set(account.is_admin),
            is_staff: Set(account.is_staff),
            is_active: Set(account.is_active),
            is_superadmin: Set(account.is_superadmin),
        }
    }
}
