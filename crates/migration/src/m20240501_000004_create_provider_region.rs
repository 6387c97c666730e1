//! Providers, regions and the many-to-many link between them.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Provider::Table)
                    .if_not_exists()
                    .col(pk_auto(Provider::Id))
                    .col(string(Provider::Name).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Region::Table)
                    .if_not_exists()
                    .col(pk_auto(Region::Id))
                    .col(string(Region::Name).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProviderRegion::Table)
                    .if_not_exists()
                    .col(integer(ProviderRegion::ProviderId).not_null())
                    .col(integer(ProviderRegion::RegionId).not_null())
                    .primary_key(
                        Index::create()
                            .col(ProviderRegion::ProviderId)
                            .col(ProviderRegion::RegionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_provider_region_provider")
                            .from(ProviderRegion::Table, ProviderRegion::ProviderId)
                            .to(Provider::Table, Provider::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_provider_region_region")
                            .from(ProviderRegion::Table, ProviderRegion::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProviderRegion::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Region::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Provider::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Provider {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Region {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum ProviderRegion {
    Table,
    ProviderId,
    RegionId,
}
