//! Natural-language narration of map-viewer layers.
//!
//! This crate turns already-classified layer descriptions into text meant to
//! be read out by a screen reader. The output is an ordered list of
//! fragments; joined without separators they form the full narrative.
//!
//! ## Usage
//!
//! ```rust
//! use layer_narrator::{describe_layers, LayerDescription, LayerType, SourceType};
//!
//! let layers = vec![LayerDescription::new(LayerType::Tile, SourceType::Osm)];
//! let text = describe_layers(&layers).concat();
//!
//! assert!(text.starts_with("The map consists of 1 layer."));
//! assert!(text.contains("OSM-source"));
//! ```
//!
//! ## What gets described
//!
//! - **Overview**: the number of layers, an ordinal per layer when there are several
//! - **Vector layers**: feature counts, intersection and rendering ratios,
//!   per-property statistics of the rendered features
//! - **WMS layers**: the requested sub-layers with redundant titles and
//!   abstracts removed, plus service-level metadata

pub mod config;
mod describer;
mod error;
mod input;

pub use config::DescriberConfig;
pub use describer::{
    describe_layers, format_number, ordinal, percentage, Describer, SubLayerRendering,
};
pub use error::{NarratorError, NarratorResult};
pub use input::{parse_descriptions, read_descriptions};

// Data model
pub use layer_narrator_core::{
    LayerDescription, LayerDetails, LayerType, RenderedStatistics, SourceType, Statistic,
    VectorLayerDetails, WmsLayerDetails, WmsSubLayer,
};
