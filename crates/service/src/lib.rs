//! Service layer providing business-oriented operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Hosts the availability search and the shared authorization gate.

pub mod errors;
pub mod crud;
pub mod services;
pub mod user_service;
pub mod availability;
pub mod access;
pub mod auth;
pub mod bootstrap;
#[cfg(test)]
pub mod test_support;

pub use services::*;
