#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use models::{role::Role, user, user_role};

/// A private in-memory database per test, fully migrated.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Insert an active user, optionally with the admin role.
pub async fn seed_user(db: &DatabaseConnection, email: &str, admin: bool) -> Result<user::Model, anyhow::Error> {
    let u = user::create(db, user::NewUser {
        first_name: "Test",
        last_name: "User",
        email,
        phone_number: "00000000",
        password_hash: "not-a-real-hash".into(),
    })
    .await?;
    user_role::grant(db, u.id, Role::User).await?;
    if admin {
        user_role::grant(db, u.id, Role::Admin).await?;
    }
    Ok(u)
}

/// A bookable configuration: car, configuration, provider operating in a
/// region with one location, and one rental object.
pub struct Offer {
    pub configuration_id: i32,
    pub provider_id: i32,
    pub location_id: i32,
    pub rental_object_id: i32,
}

pub async fn seed_offer(db: &DatabaseConnection) -> Result<Offer, anyhow::Error> {
    use models::{car, configuration, location, provider, provider_region, region, rental_object};

    let car = car::create(db, car::CarInput { make: "Volvo".into(), model: "V90".into(), year: 2020 }).await?;
    let cfg = configuration::create(db, car.id, configuration::ConfigurationInput {
        name: "C1".into(),
        fuel_type: "Diesel".into(),
        transmission_type: "Automatic".into(),
        number_of_seats: 5,
    })
    .await?;
    let west = region::create(db, region::RegionInput { name: "West".into() }).await?;
    let bergen = location::create(db, west.id, location::LocationInput { name: "Bergen".into() }).await?;
    let p1 = provider::create(db, provider::ProviderInput { name: "P1".into() }).await?;
    provider_region::link(db, p1.id, west.id).await?;
    let ro = rental_object::create(db, p1.id, cfg.id, rental_object::RentalObjectInput {
        price: 500.0,
        available: true,
        visible: true,
    })
    .await?;
    Ok(Offer { configuration_id: cfg.id, provider_id: p1.id, location_id: bergen.id, rental_object_id: ro.id })
}
