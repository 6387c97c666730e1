//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration, login and token handling live here, independent of the web layer.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;
pub mod token;

pub use service::AuthService;
