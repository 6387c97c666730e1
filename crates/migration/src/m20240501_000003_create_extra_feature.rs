use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExtraFeature::Table)
                    .if_not_exists()
                    .col(pk_auto(ExtraFeature::Id))
                    .col(string(ExtraFeature::Name).not_null())
                    .col(integer(ExtraFeature::ConfigurationId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_extra_feature_configuration")
                            .from(ExtraFeature::Table, ExtraFeature::ConfigurationId)
                            .to(Configuration::Table, Configuration::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ExtraFeature::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ExtraFeature {
    Table,
    Id,
    Name,
    ConfigurationId,
}

#[derive(DeriveIden)]
enum Configuration { Table, Id }
