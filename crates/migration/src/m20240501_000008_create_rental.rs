//! Create `rental`: a booked `[start_time, end_time]` window (epoch seconds) on a rental object.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rental::Table)
                    .if_not_exists()
                    .col(pk_auto(Rental::Id))
                    .col(big_integer(Rental::StartTime).not_null())
                    .col(big_integer(Rental::EndTime).not_null())
                    .col(integer(Rental::PickUpLocationId).not_null())
                    .col(integer(Rental::DropOffLocationId).not_null())
                    .col(integer(Rental::RentalObjectId).not_null())
                    .col(integer(Rental::UserId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_pick_up_location")
                            .from(Rental::Table, Rental::PickUpLocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_drop_off_location")
                            .from(Rental::Table, Rental::DropOffLocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_rental_object")
                            .from(Rental::Table, Rental::RentalObjectId)
                            .to(RentalObject::Table, RentalObject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_user")
                            .from(Rental::Table, Rental::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Rental::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Rental {
    Table,
    Id,
    StartTime,
    EndTime,
    PickUpLocationId,
    DropOffLocationId,
    RentalObjectId,
    UserId,
}

#[derive(DeriveIden)]
enum Location { Table, Id }

#[derive(DeriveIden)]
enum RentalObject { Table, Id }

#[derive(DeriveIden)]
enum User { Table, Id }
