//! Core domain types shared across the layer-narrator workspace.
//!
//! A [`LayerDescription`] is the already-classified summary of one map layer:
//! its kind, the kind of its source and optional details gathered from the
//! source. The JSON shape (camelCase field names, `type`/`source` tags) is
//! the one produced by the classification collaborator in the map viewer.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// =============================================================================
// Layer and Source Tags
// =============================================================================

/// Kind of a map layer, as resolved by the classification collaborator.
///
/// Tags outside the known set are kept verbatim in [`LayerType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum LayerType {
    Tile,
    Vector,
    VectorTile,
    Image,
    Heatmap,
    Group,
    /// The collaborator could not classify the layer.
    #[default]
    Unknown,
    Other(String),
}

impl LayerType {
    /// The tag exactly as it appears in the narrative.
    pub fn label(&self) -> &str {
        match self {
            LayerType::Tile => "tile-layer",
            LayerType::Vector => "vector-layer",
            LayerType::VectorTile => "vector-tile-layer",
            LayerType::Image => "image-layer",
            LayerType::Heatmap => "heatmap-layer",
            LayerType::Group => "group-layer",
            LayerType::Unknown => "unknown",
            LayerType::Other(tag) => tag,
        }
    }
}

impl From<String> for LayerType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "tile-layer" => LayerType::Tile,
            "vector-layer" => LayerType::Vector,
            "vector-tile-layer" => LayerType::VectorTile,
            "image-layer" => LayerType::Image,
            "heatmap-layer" => LayerType::Heatmap,
            "group-layer" => LayerType::Group,
            "unknown" => LayerType::Unknown,
            _ => LayerType::Other(tag),
        }
    }
}

impl From<LayerType> for String {
    fn from(layer_type: LayerType) -> Self {
        match layer_type {
            LayerType::Other(tag) => tag,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of the data source backing a layer.
///
/// Tags outside the known set are kept verbatim in [`SourceType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum SourceType {
    Vector,
    TileWms,
    ImageWms,
    Osm,
    Xyz,
    /// The collaborator could not classify the source.
    #[default]
    Unknown,
    Other(String),
}

impl SourceType {
    /// The tag exactly as it appears in the narrative.
    pub fn label(&self) -> &str {
        match self {
            SourceType::Vector => "Vector-source",
            SourceType::TileWms => "TileWMS-source",
            SourceType::ImageWms => "ImageWMS-source",
            SourceType::Osm => "OSM-source",
            SourceType::Xyz => "XYZ-source",
            SourceType::Unknown => "unknown-source",
            SourceType::Other(tag) => tag,
        }
    }

    /// Whether the source talks to a web map service.
    pub fn is_wms(&self) -> bool {
        matches!(self, SourceType::TileWms | SourceType::ImageWms)
    }
}

impl From<String> for SourceType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Vector-source" => SourceType::Vector,
            "TileWMS-source" => SourceType::TileWms,
            "ImageWMS-source" => SourceType::ImageWms,
            "OSM-source" => SourceType::Osm,
            "XYZ-source" => SourceType::Xyz,
            "unknown-source" => SourceType::Unknown,
            _ => SourceType::Other(tag),
        }
    }
}

impl From<SourceType> for String {
    fn from(source: SourceType) -> Self {
        match source {
            SourceType::Other(tag) => tag,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Vector Details
// =============================================================================

/// Basic statistics of one numeric feature property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub sum: f64,
    /// Name of the feature holding the minimum, if features carry names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_name: Option<String>,
    /// Name of the feature holding the maximum, if features carry names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_name: Option<String>,
}

impl Statistic {
    /// Statistic without feature names.
    pub fn new(min: f64, max: f64, avg: f64, sum: f64) -> Self {
        Self {
            min,
            max,
            avg,
            sum,
            min_name: None,
            max_name: None,
        }
    }

    /// Attach the names of the features holding the extremes.
    pub fn with_names(mut self, min_name: impl Into<String>, max_name: impl Into<String>) -> Self {
        self.min_name = Some(min_name.into());
        self.max_name = Some(max_name.into());
        self
    }

    /// The minimum feature name, ignoring empty strings.
    pub fn min_name(&self) -> Option<&str> {
        non_empty(self.min_name.as_deref())
    }

    /// The maximum feature name, ignoring empty strings.
    pub fn max_name(&self) -> Option<&str> {
        non_empty(self.max_name.as_deref())
    }

    /// True when every feature carried the same value.
    pub fn is_uniform(&self) -> bool {
        self.min == self.max && self.max == self.avg
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Per-property statistics of the rendered features, in insertion order.
///
/// Serialized as a JSON object; key order survives a decode/encode cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedStatistics(Vec<(String, Statistic)>);

impl RenderedStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property. A repeated name replaces the earlier entry in place.
    pub fn insert(&mut self, property: impl Into<String>, statistic: Statistic) {
        let property = property.into();
        match self.0.iter_mut().find(|(name, _)| *name == property) {
            Some(entry) => entry.1 = statistic,
            None => self.0.push((property, statistic)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&Statistic> {
        self.0
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, stat)| stat)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Property names in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Statistic)> {
        self.0.iter().map(|(name, stat)| (name.as_str(), stat))
    }
}

impl<K: Into<String>> FromIterator<(K, Statistic)> for RenderedStatistics {
    fn from_iter<I: IntoIterator<Item = (K, Statistic)>>(iter: I) -> Self {
        let mut stats = Self::new();
        for (property, statistic) in iter {
            stats.insert(property, statistic);
        }
        stats
    }
}

impl Serialize for RenderedStatistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (property, statistic) in &self.0 {
            map.serialize_entry(property, statistic)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RenderedStatistics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = RenderedStatistics;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from property name to statistic")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut stats = RenderedStatistics::new();
                while let Some((property, statistic)) =
                    access.next_entry::<String, Statistic>()?
                {
                    stats.insert(property, statistic);
                }
                Ok(stats)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// Feature counts and statistics for a vector layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VectorLayerDetails {
    /// Features intersecting the current extent.
    pub num_features_in_extent: u64,
    /// Intersecting features that were actually rendered.
    pub num_rendered_features_in_extent: u64,
    /// Intersecting features that were skipped by the renderer.
    pub num_skipped_features_in_extent: u64,
    /// All features held by the source.
    pub num_total_features_in_source: u64,
    #[serde(default)]
    pub rendered_statistics: RenderedStatistics,
}

// =============================================================================
// WMS Details
// =============================================================================

/// Capabilities metadata of a WMS-backed layer.
///
/// The `wms_layer_*` vectors are parallel: index `i` of each describes the
/// same requested sub-layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WmsLayerDetails {
    #[serde(default)]
    pub service_title: String,
    #[serde(default)]
    pub service_abstract: String,
    #[serde(default)]
    pub service_keywords: Vec<String>,
    #[serde(default)]
    pub top_level_layer_title: String,
    #[serde(default)]
    pub top_level_layer_abstract: String,
    pub wms_layer_names: Vec<String>,
    #[serde(default)]
    pub wms_layer_titles: Vec<String>,
    #[serde(default)]
    pub wms_layer_abstracts: Vec<String>,
    #[serde(default, rename = "wmsLayerMetadataURLs")]
    pub wms_layer_metadata_urls: Vec<String>,
}

/// One requested WMS sub-layer, borrowed from [`WmsLayerDetails`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmsSubLayer<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub abstract_text: &'a str,
    pub metadata_url: &'a str,
}

impl WmsLayerDetails {
    /// Number of requested sub-layers, one per name.
    pub fn sub_layer_count(&self) -> usize {
        self.wms_layer_names.len()
    }

    /// Whether the parallel vectors disagree in length.
    pub fn has_length_mismatch(&self) -> bool {
        let n = self.wms_layer_names.len();
        self.wms_layer_titles.len() != n
            || self.wms_layer_abstracts.len() != n
            || self.wms_layer_metadata_urls.len() != n
    }

    /// One entry per name. Missing titles, abstracts and URLs read as empty;
    /// entries past the last name are ignored.
    pub fn sub_layers(&self) -> impl Iterator<Item = WmsSubLayer<'_>> {
        self.wms_layer_names
            .iter()
            .enumerate()
            .map(move |(index, name)| WmsSubLayer {
                name,
                title: entry(&self.wms_layer_titles, index),
                abstract_text: entry(&self.wms_layer_abstracts, index),
                metadata_url: entry(&self.wms_layer_metadata_urls, index),
            })
    }

    /// Append a sub-layer to all parallel vectors at once.
    pub fn push_sub_layer(
        &mut self,
        name: impl Into<String>,
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        metadata_url: impl Into<String>,
    ) {
        self.wms_layer_names.push(name.into());
        self.wms_layer_titles.push(title.into());
        self.wms_layer_abstracts.push(abstract_text.into());
        self.wms_layer_metadata_urls.push(metadata_url.into());
    }
}

fn entry(values: &[String], index: usize) -> &str {
    values.get(index).map(String::as_str).unwrap_or("")
}

// =============================================================================
// Layer Description
// =============================================================================

/// Details gathered from a layer's source.
///
/// Decoded by shape. Objects matching neither known shape are kept as
/// [`LayerDetails::Unrecognized`] so one odd layer cannot fail a whole
/// request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayerDetails {
    Vector(VectorLayerDetails),
    Wms(WmsLayerDetails),
    Unrecognized(Value),
}

impl From<VectorLayerDetails> for LayerDetails {
    fn from(details: VectorLayerDetails) -> Self {
        LayerDetails::Vector(details)
    }
}

impl From<WmsLayerDetails> for LayerDetails {
    fn from(details: WmsLayerDetails) -> Self {
        LayerDetails::Wms(details)
    }
}

/// Classified summary of a single map layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LayerDescription {
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    pub source: SourceType,
    #[serde(default)]
    pub details: Option<LayerDetails>,
}

impl LayerDescription {
    /// Description without any source details.
    pub fn new(layer_type: LayerType, source: SourceType) -> Self {
        Self {
            layer_type,
            source,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<LayerDetails>) -> Self {
        self.details = Some(details.into());
        self
    }
}
