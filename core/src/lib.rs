//! aseguradora-core — synthetic insurance dataset generator.
//!
//! Produces four related tables (clients, policies, claims, payments)
//! with consistent foreign keys, causally ordered dates, and
//! byte-identical reproducibility under a fixed seed and anchor date.
//! The CSV store and the load-or-generate provider sit at the
//! boundary with any presentation front end.

pub mod claims;
pub mod clients;
pub mod config;
pub mod csv_store;
pub mod error;
pub mod generator;
pub mod name_generator;
pub mod payments;
pub mod policies;
pub mod provider;
pub mod rng;
pub mod summary;
pub mod types;
