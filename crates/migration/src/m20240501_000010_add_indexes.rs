use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Configuration: lookups by car
        manager
            .create_index(
                Index::create()
                    .name("idx_configuration_car")
                    .table(Configuration::Table)
                    .col(Configuration::CarId)
                    .to_owned(),
            )
            .await?;

        // RentalObject: the search walks rental objects per configuration
        manager
            .create_index(
                Index::create()
                    .name("idx_rental_object_configuration")
                    .table(RentalObject::Table)
                    .col(RentalObject::ConfigurationId)
                    .to_owned(),
            )
            .await?;

        // Rental: overlap checks per rental object
        manager
            .create_index(
                Index::create()
                    .name("idx_rental_rental_object")
                    .table(Rental::Table)
                    .col(Rental::RentalObjectId)
                    .to_owned(),
            )
            .await?;

        // Location: region -> locations
        manager
            .create_index(
                Index::create()
                    .name("idx_location_region")
                    .table(Location::Table)
                    .col(Location::RegionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_configuration_car").table(Configuration::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_rental_object_configuration").table(RentalObject::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_rental_rental_object").table(Rental::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_location_region").table(Location::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Configuration { Table, CarId }

#[derive(DeriveIden)]
enum RentalObject { Table, ConfigurationId }

#[derive(DeriveIden)]
enum Rental { Table, RentalObjectId }

#[derive(DeriveIden)]
enum Location { Table, RegionId }
