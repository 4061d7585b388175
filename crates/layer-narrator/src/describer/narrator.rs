//! The describer: layer descriptions in, text fragments out.

use layer_narrator_core::{LayerDescription, LayerDetails};
use tracing::{debug, warn};

use super::wording::ordinal;
use super::{vector, wms};
use crate::config::DescriberConfig;

/// Turns an ordered list of layer descriptions into narrative fragments.
///
/// The fragments must be concatenated in order, without separators, to form
/// the full text. A `Describer` holds only its configuration, so one instance
/// can serve any number of calls, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Describer {
    config: DescriberConfig,
}

impl Describer {
    /// Create a new describer with default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new describer with custom config.
    pub fn with_config(config: DescriberConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DescriberConfig {
        &self.config
    }

    /// Describe all layers, preserving their order.
    pub fn describe(&self, descriptions: &[LayerDescription]) -> Vec<String> {
        debug!(layers = descriptions.len(), "Describing layers");

        let mut fragments = vec![overview(descriptions.len())];
        let numbered = descriptions.len() > 1;

        for (index, description) in descriptions.iter().enumerate() {
            let position = numbered.then_some(index + 1);
            self.describe_layer(description, position, &mut fragments);
        }

        fragments
    }

    /// Describe all layers and join the fragments.
    pub fn describe_to_string(&self, descriptions: &[LayerDescription]) -> String {
        self.describe(descriptions).concat()
    }

    fn describe_layer(
        &self,
        description: &LayerDescription,
        position: Option<usize>,
        out: &mut Vec<String>,
    ) {
        let subject = match position {
            Some(n) => format!("The {} layer", ordinal(n)),
            None => "The layer".to_string(),
        };
        out.push(format!(
            " {} is of type {} and uses a source of type {}.",
            subject, description.layer_type, description.source
        ));

        match &description.details {
            None => {}
            Some(LayerDetails::Vector(details)) => vector::describe(details, &self.config, out),
            Some(LayerDetails::Wms(details)) => wms::describe(details, &self.config, out),
            Some(LayerDetails::Unrecognized(_)) => {
                warn!(
                    position = position.unwrap_or(1),
                    layer_type = %description.layer_type,
                    "Ignoring layer details of unrecognized shape"
                );
            }
        }
    }
}

/// Describe layers with the default configuration.
pub fn describe_layers(descriptions: &[LayerDescription]) -> Vec<String> {
    Describer::new().describe(descriptions)
}

fn overview(count: usize) -> String {
    let noun = if count == 1 { "layer" } else { "layers" };
    format!("The map consists of {} {}.", count, noun)
}
