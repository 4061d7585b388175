//! Decoding layer descriptions supplied as JSON.

use std::io::Read;

use layer_narrator_core::LayerDescription;
use tracing::debug;

use crate::error::NarratorResult;

/// Parse a JSON array of layer descriptions.
pub fn parse_descriptions(json: &str) -> NarratorResult<Vec<LayerDescription>> {
    let descriptions: Vec<LayerDescription> = serde_json::from_str(json)?;
    debug!(layers = descriptions.len(), "Parsed layer descriptions");
    Ok(descriptions)
}

/// Read and parse a JSON array of layer descriptions from a reader.
pub fn read_descriptions(mut reader: impl Read) -> NarratorResult<Vec<LayerDescription>> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_descriptions(&contents)
}
