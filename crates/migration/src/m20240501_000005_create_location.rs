use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_auto(Location::Id))
                    .col(string(Location::Name).not_null())
                    .col(integer(Location::RegionId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_region")
                            .from(Location::Table, Location::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Location::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Location {
    Table,
    Id,
    Name,
    RegionId,
}

#[derive(DeriveIden)]
enum Region { Table, Id }
