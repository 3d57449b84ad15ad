//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # osmgeo-entities
//!
//! Reusable, agnostic domain entities for osmgeo.
//!
//! The entities only contain generic functionality that does not reveal any provider-specific logic.

pub mod geo;
pub mod params;
pub mod place;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
