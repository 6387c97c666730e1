//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_car;
mod m20240501_000002_create_configuration;
mod m20240501_000003_create_extra_feature;
mod m20240501_000004_create_provider_region;
mod m20240501_000005_create_location;
mod m20240501_000006_create_rental_object;
mod m20240501_000007_create_user_role;
mod m20240501_000008_create_rental;
mod m20240501_000009_create_review;
mod m20240501_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_car::Migration),
            Box::new(m20240501_000002_create_configuration::Migration),
            Box::new(m20240501_000003_create_extra_feature::Migration),
            Box::new(m20240501_000004_create_provider_region::Migration),
            Box::new(m20240501_000005_create_location::Migration),
            Box::new(m20240501_000006_create_rental_object::Migration),
            Box::new(m20240501_000007_create_user_role::Migration),
            Box::new(m20240501_000008_create_rental::Migration),
            Box::new(m20240501_000009_create_review::Migration),
            // Indexes should always be applied last
            Box::new(m20240501_000010_add_indexes::Migration),
        ]
    }
}
