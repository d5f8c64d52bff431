//! Core types and loader for the national bridge inventory published by the
//! Slovak road databank (CDB).
//!
//! The loader turns a raw tabular export into a [`dataset::BridgeDataset`]:
//! an immutable, canonically ordered collection of [`record::BridgeRecord`]s
//! whose categorical fields have already been mapped onto closed enums.

pub mod condition;
pub mod dataset;
pub mod error;
pub mod format;
pub mod loader;
pub mod record;
pub mod road_class;
