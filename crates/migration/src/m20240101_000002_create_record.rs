//! Create `record` table for name/email entries posted to `/create`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Record::Table)
                    .if_not_exists()
                    .col(pk_auto(Record::Id))
                    .col(text(Record::Name))
                    .col(text(Record::Email))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Record::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Record { Table, Id, Name, Email }
