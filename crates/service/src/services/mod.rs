//! One module per resource. Every `add_*` checks parents first, then
//! validates, then inserts; every `update_*` validates before looking the row up.

pub mod car_service;
pub mod configuration_service;
pub mod extra_feature_service;
pub mod location_service;
pub mod provider_service;
pub mod region_service;
pub mod rental_object_service;
pub mod rental_service;
pub mod review_service;
