//! Hospital admin server API client library
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use hospital_api_rs::prelude::*;
//! ```
//!
//! This re-exports the most commonly used types including [`HospitalClient`](client::HospitalClient),
//! error types, and the entity data models.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod prelude;
