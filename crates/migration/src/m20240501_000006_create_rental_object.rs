use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RentalObject::Table)
                    .if_not_exists()
                    .col(pk_auto(RentalObject::Id))
                    .col(double(RentalObject::Price).not_null())
                    .col(boolean(RentalObject::Available).not_null().default(true))
                    .col(boolean(RentalObject::Visible).not_null().default(true))
                    .col(integer(RentalObject::ProviderId).not_null())
                    .col(integer(RentalObject::ConfigurationId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_object_provider")
                            .from(RentalObject::Table, RentalObject::ProviderId)
                            .to(Provider::Table, Provider::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_object_configuration")
                            .from(RentalObject::Table, RentalObject::ConfigurationId)
                            .to(Configuration::Table, Configuration::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RentalObject::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum RentalObject {
    Table,
    Id,
    Price,
    Available,
    Visible,
    ProviderId,
    ConfigurationId,
}

#[derive(DeriveIden)]
enum Provider { Table, Id }

#[derive(DeriveIden)]
enum Configuration { Table, Id }
