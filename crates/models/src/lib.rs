//! Entity model of the rental marketplace: SeaORM entities, input payloads
//! and their validity predicates.

pub mod errors;
pub mod db;
pub mod car;
pub mod configuration;
pub mod extra_feature;
pub mod provider;
pub mod region;
pub mod provider_region;
pub mod location;
pub mod rental_object;
pub mod rental;
pub mod review;
pub mod user;
pub mod role;
pub mod user_role;

#[cfg(test)]
mod tests;
