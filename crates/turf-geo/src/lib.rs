//! Turf Geo - spherical geometry algorithms
//!
//! This crate holds every algorithm that operates on the `turf-core` value model:
//! unit conversion, measurement, coordinate extraction, type assertions,
//! point-in-polygon joins, line processing, simplification, circle generation
//! and nearest-point classification. All functions are pure and synchronous.

pub mod assertions;
pub mod classification;
pub mod conversion;
pub mod joins;
pub mod measurement;
pub mod meta;
pub mod misc;
pub mod models;
pub mod simplify;
pub mod transformation;
pub mod validation;

pub use turf_core::{Result, TurfError};
