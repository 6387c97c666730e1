use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Configuration::Table)
                    .if_not_exists()
                    .col(pk_auto(Configuration::Id))
                    .col(string(Configuration::Name).not_null())
                    .col(string(Configuration::FuelType).not_null())
                    .col(string(Configuration::TransmissionType).not_null())
                    .col(integer(Configuration::NumberOfSeats).not_null())
                    .col(integer(Configuration::CarId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_configuration_car")
                            .from(Configuration::Table, Configuration::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Configuration::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Configuration {
    Table,
    Id,
    Name,
    FuelType,
    TransmissionType,
    NumberOfSeats,
    CarId,
}

#[derive(DeriveIden)]
enum Car { Table, Id }
