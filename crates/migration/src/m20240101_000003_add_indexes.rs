use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Sum: lookups by result value (float rows and exact integer rows)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_sum_result")
                    .table(Sum::Table)
                    .col(Sum::Result)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_sum_result_int")
                    .table(Sum::Table)
                    .col(Sum::ResultInt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_sum_result_int").table(Sum::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_sum_result").table(Sum::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Sum { Table, Result, ResultInt }
