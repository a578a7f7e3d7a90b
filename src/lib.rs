//! Objective markers: the annotations drawn over the world and minimap to highlight objectives.
//!
//! Markers live in a [`MarkerStore`], are mutated field-by-field by scripts through
//! [`MarkerControl`] codes, and are persisted as a tagged binary section.

/// Common functions, structures used in parsing and also useful for the markers.
pub mod common;

/// Config management.
pub mod config;

/// Resolution of bracket icon tags in marker text.
pub mod icons;

/// The marker variants and their control protocol.
pub mod marker;

/// Id-indexed marker container and its binary section.
pub mod store;

/// Lua bindings for marker scripts.
pub mod lua;

pub use marker::{MarkerControl, MarkerKind, MarkerType, ObjectiveMarker};
pub use store::MarkerStore;
