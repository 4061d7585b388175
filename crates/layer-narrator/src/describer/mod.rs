//! Narrative generation for layer descriptions.
//!
//! - **Overview**: layer count and, per layer, its type and source tags
//! - **Vector**: feature counts and rendered-feature statistics
//! - **WMS**: sub-layer composition and service metadata

mod narrator;
mod vector;
mod wms;
mod wording;

pub use narrator::{describe_layers, Describer};
pub use wms::SubLayerRendering;
pub use wording::{format_number, ordinal, percentage};
