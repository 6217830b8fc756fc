//! Create `sum` table.
//!
//! Each number gets a double column plus a nullable `BIGINT` twin that holds the
//! exact value when the number is an integer. A NULL twin means the value is a float.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sum::Table)
                    .if_not_exists()
                    .col(pk_auto(Sum::Id))
                    .col(double(Sum::Num1))
                    .col(big_integer_null(Sum::Num1Int))
                    .col(double(Sum::Num2))
                    .col(big_integer_null(Sum::Num2Int))
                    .col(double(Sum::Result))
                    .col(big_integer_null(Sum::ResultInt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Sum::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Sum { Table, Id, Num1, Num1Int, Num2, Num2Int, Result, ResultInt }
