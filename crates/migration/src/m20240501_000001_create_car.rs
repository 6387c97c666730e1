use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(string(Car::Make).not_null())
                    .col(string(Car::Model).not_null())
                    .col(integer(Car::Year).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Car::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Car {
    Table,
    Id,
    Make,
    Model,
    Year,
}
