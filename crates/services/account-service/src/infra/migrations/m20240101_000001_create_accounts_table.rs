//! Migration: Create accounts table.

use domain::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH};
use sea_orm_migration::prelude::*;

const NAME_LEN: u32 = MAX_NAME_LENGTH as u32;
const EMAIL_LEN: u32 = MAX_EMAIL_LENGTH as u32;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Accounts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Accounts::FirstName).string_len(NAME_LEN).not_null())
                    .col(ColumnDef::new(Accounts::LastName).string_len(NAME_LEN).not_null())
                    .col(ColumnDef::new(Accounts::Username).string_len(NAME_LEN).not_null())
                    .col(ColumnDef::new(Accounts::Email).string_len(EMAIL_LEN).not_null())
                    .col(
                        ColumnDef::new(Accounts::PhoneNumber)
                            .string_len(NAME_LEN)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Accounts::Password).string().not_null())
                    .col(
                        ColumnDef::new(Accounts::DateJoined)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Accounts::LastLogin)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Accounts::IsAdmin).boolean().not_null().default(false))
                    .col(ColumnDef::new(Accounts::IsStaff).boolean().not_null().default(false))
                    .col(ColumnDef::new(Accounts::IsActive).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(Accounts::IsSuperadmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // Uniqueness lives in the store so concurrent creates resolve here
        manager
            .create_index(
                Index::create()
                    .name("idx-accounts-username")
                    .table(Accounts::Table)
                    .col(Accounts::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-accounts-email")
                    .table(Accounts::Table)
                    .col(Accounts::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
    FirstName,
    LastName,
    Username,
    Email,
    PhoneNumber,
    Password,
    DateJoined,
    LastLogin,
    IsAdmin,
    IsStaff,
    IsActive,
    IsSuperadmin,
}
