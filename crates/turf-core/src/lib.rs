//! Turf Core - Geometry values, units, errors, and configuration
//!
//! This crate holds the value types every turf algorithm consumes and produces,
//! together with the unit table and the layered defaults.

pub mod config;
pub mod error;
pub mod models;

pub use error::{Result, TurfError};
