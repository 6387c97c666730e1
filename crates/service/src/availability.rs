//! Rental availability search.
//!
//! The search runs over an [`Inventory`]: a snapshot of configurations,
//! rental objects, rentals, provider regions and locations, with the reverse
//! lookups the filter needs built as explicit indices. Entities only hold
//! their parent ids; nothing points back up.
//!
//! A configuration matches a request when
//! - no rental of any of its rental objects overlaps the window, and
//! - if a location was requested, some provider offering the configuration
//!   operates in a region containing the pick-up location, and some
//!   (possibly different) provider operates in a region containing the
//!   drop-off location.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use models::{configuration, location, provider_region, rental, rental_object};
use crate::{crud, errors::ServiceError};

/// Requested window (epoch seconds) and optional locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub pick_up_location: Option<i32>,
    pub drop_off_location: Option<i32>,
    pub start_time: i64,
    pub end_time: i64,
}

impl SearchQuery {
    pub fn window(start_time: i64, end_time: i64) -> Self {
        Self { pick_up_location: None, drop_off_location: None, start_time, end_time }
    }

    pub fn at(mut self, pick_up: i32, drop_off: i32) -> Self {
        self.pick_up_location = Some(pick_up);
        self.drop_off_location = Some(drop_off);
        self
    }

    fn has_location(&self) -> bool {
        self.pick_up_location.is_some() || self.drop_off_location.is_some()
    }
}

/// Whether `r` conflicts with the window `[start, end]`.
///
/// Touching endpoints count as a conflict.
pub fn overlaps(r: &rental::Model, start: i64, end: i64) -> bool {
    (r.start_time >= start && r.start_time <= end)
        || (r.end_time >= start && r.end_time <= end)
        || (r.start_time < start && r.end_time > end)
}

#[derive(Debug, Default)]
pub struct Inventory {
    configurations: Vec<configuration::Model>,
    rental_objects: Vec<rental_object::Model>,
    rentals: Vec<rental::Model>,
    // configuration id -> indices into `rental_objects`
    objects_by_configuration: HashMap<i32, Vec<usize>>,
    // rental object id -> indices into `rentals`
    rentals_by_object: HashMap<i32, Vec<usize>>,
    regions_by_provider: HashMap<i32, Vec<i32>>,
    locations_by_region: HashMap<i32, HashSet<i32>>,
}

impl Inventory {
    /// Build the snapshot. Configurations keep the order they are given in.
    pub fn new(
        configurations: Vec<configuration::Model>,
        rental_objects: Vec<rental_object::Model>,
        rentals: Vec<rental::Model>,
        provider_regions: Vec<provider_region::Model>,
        locations: Vec<location::Model>,
    ) -> Self {
        let mut objects_by_configuration: HashMap<i32, Vec<usize>> = HashMap::new();
        for (idx, ro) in rental_objects.iter().enumerate() {
            objects_by_configuration.entry(ro.configuration_id).or_default().push(idx);
        }

        let mut rentals_by_object: HashMap<i32, Vec<usize>> = HashMap::new();
        for (idx, r) in rentals.iter().enumerate() {
            rentals_by_object.entry(r.rental_object_id).or_default().push(idx);
        }

        let mut regions_by_provider: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in &provider_regions {
            regions_by_provider.entry(link.provider_id).or_default().push(link.region_id);
        }

        let mut locations_by_region: HashMap<i32, HashSet<i32>> = HashMap::new();
        for loc in &locations {
            locations_by_region.entry(loc.region_id).or_default().insert(loc.id);
        }

        Self {
            configurations,
            rental_objects,
            rentals,
            objects_by_configuration,
            rentals_by_object,
            regions_by_provider,
            locations_by_region,
        }
    }

    /// Snapshot the current store, configurations ordered by id.
    pub async fn load(db: &DatabaseConnection) -> Result<Self, ServiceError> {
        Ok(Self::new(
            crud::list::<configuration::Entity>(db).await?,
            crud::list::<rental_object::Entity>(db).await?,
            crud::list::<rental::Entity>(db).await?,
            crud::list::<provider_region::Entity>(db).await?,
            crud::list::<location::Entity>(db).await?,
        ))
    }

    pub fn configurations(&self) -> &[configuration::Model] {
        &self.configurations
    }

    fn objects_of(&self, configuration_id: i32) -> impl Iterator<Item = &rental_object::Model> {
        self.objects_by_configuration
            .get(&configuration_id)
            .into_iter()
            .flatten()
            .map(|&idx| &self.rental_objects[idx])
    }

    fn rentals_of(&self, rental_object_id: i32) -> impl Iterator<Item = &rental::Model> {
        self.rentals_by_object
            .get(&rental_object_id)
            .into_iter()
            .flatten()
            .map(|&idx| &self.rentals[idx])
    }

    fn region_has(&self, region_id: i32, location_id: i32) -> bool {
        self.locations_by_region
            .get(&region_id)
            .is_some_and(|locs| locs.contains(&location_id))
    }

    /// No rental on any of the configuration's rental objects overlaps `[start, end]`.
    pub fn is_time_available(&self, configuration_id: i32, start: i64, end: i64) -> bool {
        !self
            .objects_of(configuration_id)
            .flat_map(|ro| self.rentals_of(ro.id))
            .any(|r| overlaps(r, start, end))
    }

    /// Pick-up and drop-off are each served by some provider region of some
    /// rental object of the configuration. An absent side is never served.
    pub fn is_location_available(&self, configuration_id: i32, pick_up: Option<i32>, drop_off: Option<i32>) -> bool {
        let mut pick_up_ok = false;
        let mut drop_off_ok = false;
        for ro in self.objects_of(configuration_id) {
            let regions = self.regions_by_provider.get(&ro.provider_id).into_iter().flatten();
            for &region_id in regions {
                if let Some(loc) = pick_up {
                    pick_up_ok |= self.region_has(region_id, loc);
                }
                if let Some(loc) = drop_off {
                    drop_off_ok |= self.region_has(region_id, loc);
                }
                if pick_up_ok && drop_off_ok {
                    return true;
                }
            }
        }
        false
    }

    /// Configurations satisfying `query`, in snapshot order.
    pub fn search(&self, query: &SearchQuery) -> Vec<&configuration::Model> {
        let (start, end) = (query.start_time, query.end_time);
        if query.has_location() {
            self.configurations
                .iter()
                .filter(|c| {
                    self.is_location_available(c.id, query.pick_up_location, query.drop_off_location)
                        && self.is_time_available(c.id, start, end)
                })
                .collect()
        } else {
            self.configurations
                .iter()
                .filter(|c| self.is_time_available(c.id, start, end))
                .collect()
        }
    }
}
