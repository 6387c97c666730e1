use std::collections::HashMap;

use sea_orm::{DatabaseConnection, ActiveModelTrait};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use models::{car, configuration::{self, ConfigurationInput}, location, rental_object};
use crate::availability::{Inventory, SearchQuery};
use crate::{crud, errors::ServiceError};

/// Price reported for a configuration with no rental objects.
pub const NO_PRICE: f64 = 9999.0;

/// Flattened configuration row for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationSummary {
    pub make: String,
    pub model: String,
    pub name: String,
    pub fuel_type: String,
    pub transmission_type: String,
    pub number_of_seats: i32,
    pub price: f64,
}

pub async fn list_configurations(db: &DatabaseConnection) -> Result<Vec<configuration::Model>, ServiceError> {
    crud::list::<configuration::Entity>(db).await
}

pub async fn get_configuration(db: &DatabaseConnection, id: i32) -> Result<Option<configuration::Model>, ServiceError> {
    crud::find::<configuration::Entity>(db, id).await
}

/// Create a configuration for an existing car.
pub async fn add_configuration(db: &DatabaseConnection, car_id: i32, input: ConfigurationInput) -> Result<i32, ServiceError> {
    crud::require::<car::Entity>(db, car_id, "Car").await?;
    let created = configuration::create(db, car_id, input).await?;
    info!(configuration_id = created.id, car_id, "configuration_created");
    Ok(created.id)
}

/// Overwrite name, fuel type, transmission type and seat count.
pub async fn update_configuration(db: &DatabaseConnection, id: i32, input: ConfigurationInput) -> Result<bool, ServiceError> {
    input.validate()?;
    let Some(found) = crud::find::<configuration::Entity>(db, id).await? else { return Ok(false) };
    let mut am: configuration::ActiveModel = found.into();
    input.apply(&mut am);
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(true)
}

pub async fn delete_configuration(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    crud::delete::<configuration::Entity>(db, id).await
}

/// Lowest price among the rental objects, or [`NO_PRICE`].
pub fn lowest_price<'a>(objects: impl IntoIterator<Item = &'a rental_object::Model>) -> f64 {
    objects
        .into_iter()
        .fold(NO_PRICE, |acc, ro| if ro.price < acc { ro.price } else { acc })
}

/// Every configuration joined with its car and cheapest rental object.
pub async fn list_summaries(db: &DatabaseConnection) -> Result<Vec<ConfigurationSummary>, ServiceError> {
    let configurations = crud::list::<configuration::Entity>(db).await?;
    let cars: HashMap<i32, car::Model> = crud::list::<car::Entity>(db)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();
    let mut objects: HashMap<i32, Vec<rental_object::Model>> = HashMap::new();
    for ro in crud::list::<rental_object::Entity>(db).await? {
        objects.entry(ro.configuration_id).or_default().push(ro);
    }

    let summaries = configurations
        .into_iter()
        .filter_map(|cfg| {
            let car = cars.get(&cfg.car_id)?;
            let price = lowest_price(objects.get(&cfg.id).into_iter().flatten());
            Some(ConfigurationSummary {
                make: car.make.clone(),
                model: car.model.clone(),
                name: cfg.name,
                fuel_type: cfg.fuel_type,
                transmission_type: cfg.transmission_type,
                number_of_seats: cfg.number_of_seats,
                price,
            })
        })
        .collect();
    Ok(summaries)
}

/// Configurations that can serve the requested window and locations.
///
/// Referenced locations must exist; an unknown id is reported as not found
/// rather than silently matching nothing.
pub async fn search_available(db: &DatabaseConnection, query: SearchQuery) -> Result<Vec<configuration::Model>, ServiceError> {
    if let Some(id) = query.pick_up_location {
        crud::require::<location::Entity>(db, id, "Pick up location").await?;
    }
    if let Some(id) = query.drop_off_location {
        crud::require::<location::Entity>(db, id, "Drop off location").await?;
    }
    let inventory = Inventory::load(db).await?;
    let found: Vec<configuration::Model> = inventory.search(&query).into_iter().cloned().collect();
    debug!(
        pick_up = ?query.pick_up_location,
        drop_off = ?query.drop_off_location,
        start = query.start_time,
        end = query.end_time,
        matches = found.len(),
        "availability_search"
    );
    Ok(found)
}
