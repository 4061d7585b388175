//! Integration tests for layer-narrator using in-memory layer fixtures.

use layer_narrator::{
    describe_layers, parse_descriptions, Describer, DescriberConfig, LayerDescription,
    LayerDetails, LayerType, RenderedStatistics, SourceType, Statistic, VectorLayerDetails,
    WmsLayerDetails,
};

// ============================================================================
// Fixtures
// ============================================================================

fn tile_layer_basic() -> LayerDescription {
    LayerDescription::new(LayerType::Tile, SourceType::Unknown)
}

fn vector_layer_basic() -> LayerDescription {
    LayerDescription::new(LayerType::Vector, SourceType::Vector)
}

fn vector_layer(
    counts: (u64, u64, u64, u64),
    stats: impl IntoIterator<Item = (&'static str, Statistic)>,
) -> LayerDescription {
    let (in_extent, rendered, skipped, total) = counts;
    vector_layer_basic().with_details(VectorLayerDetails {
        num_features_in_extent: in_extent,
        num_rendered_features_in_extent: rendered,
        num_skipped_features_in_extent: skipped,
        num_total_features_in_source: total,
        rendered_statistics: stats.into_iter().collect::<RenderedStatistics>(),
    })
}

fn vector_layer_with_details() -> LayerDescription {
    vector_layer(
        (4, 1, 3, 8),
        [(
            "propFoo",
            Statistic::new(1.0, 1.0, 1.0, 1.0).with_names("Luffy", "Luffy"),
        )],
    )
}

fn vector_layer_more_features() -> LayerDescription {
    vector_layer(
        (4, 3, 1, 8),
        [
            (
                "someProp",
                Statistic::new(1.0, 3.0, 2.0, 6.0).with_names("min value", "MAX VALUE"),
            ),
            (
                "anotherOne",
                Statistic::new(-10.0, 10.0, 0.0, 0.0).with_names("min", "MAX"),
            ),
        ],
    )
}

fn vector_layer_without_names() -> LayerDescription {
    vector_layer((2, 2, 2, 2), [("scribble", Statistic::new(1.0, 1.0, 1.0, 1.0))])
}

fn wms_details(sub_layers: &[(&str, &str, &str)]) -> WmsLayerDetails {
    let mut details = WmsLayerDetails {
        service_title: "Foo".to_string(),
        service_abstract: "Foo Abstract".to_string(),
        service_keywords: vec![
            "Service keyword 1".to_string(),
            "Service keyword 2".to_string(),
        ],
        top_level_layer_title: "The title of layer-number-1".to_string(),
        top_level_layer_abstract: "The abstract of layer-number-1".to_string(),
        ..Default::default()
    };
    for (name, title, abstract_text) in sub_layers {
        details.push_sub_layer(
            *name,
            *title,
            *abstract_text,
            format!("http://www.example.com/metadata/{}.xml", name),
        );
    }
    details
}

fn wms_layer(sub_layers: &[(&str, &str, &str)]) -> LayerDescription {
    LayerDescription::new(LayerType::Tile, SourceType::TileWms).with_details(wms_details(sub_layers))
}

fn single_wms_layer_with(title: &str, abstract_text: &str) -> LayerDescription {
    wms_layer(&[("a", title, abstract_text)])
}

fn text_for(descriptions: &[LayerDescription]) -> String {
    let fragments = describe_layers(descriptions);
    assert!(!fragments.is_empty());
    fragments.concat()
}

// ============================================================================
// Overview
// ============================================================================

#[test]
fn test_describes_basic_tile_layer() {
    let text = text_for(&[tile_layer_basic()]);
    assert!(text.contains("1 layer."));
    assert!(text.contains("tile-layer"));
    assert!(text.contains("unknown-source"));
}

#[test]
fn test_describes_basic_vector_layer_without_details() {
    let text = text_for(&[vector_layer_basic()]);
    assert!(text.contains("1 layer."));
    assert!(text.contains("vector-layer"));
    assert!(text.contains("Vector-source"));
}

#[test]
fn test_counts_many_layers() {
    let layers: Vec<_> = (0..12).map(|_| tile_layer_basic()).collect();
    let text = text_for(&layers);
    assert!(text.contains("12 layers."));
    assert!(text.contains("The tenth layer"));
    assert!(text.contains("The 11th layer"));
    assert!(text.contains("The 12th layer"));
}

// ============================================================================
// Vector Layers
// ============================================================================

#[test]
fn test_describes_vector_details() {
    let text = text_for(&[vector_layer_with_details()]);
    assert!(text.contains("1 layer."));
    assert!(text.contains("vector-layer"));
    assert!(text.contains("Vector-source"));
    assert!(text.contains("contains 8 features"));
    assert!(text.contains("4 (50%) intersect"));
    assert!(text.contains("rendered was 1 (25%) feature"));
    assert!(!text.contains("rendered was 1 (25%) features"));
    assert!(text.contains("basic statistical information"));
    assert!(text.contains("propFoo"));
    assert!(text.contains("the value is 1"));
    assert!(text.contains("named 'Luffy'"));
}

#[test]
fn test_describes_multiple_vector_layers() {
    let text = text_for(&[vector_layer_with_details(), vector_layer_more_features()]);
    assert!(text.contains("2 layers."));
    assert!(text.find("first").unwrap() < text.find("second").unwrap());
    assert!(text.contains("'someProp', 'anotherOne'"));
    assert!(text.contains("minimal value is 1 (feature named 'min value')"));
    assert!(text.contains("maximum value is 3 (for the feature with name 'MAX VALUE')"));
    assert!(text.contains("average value is 2 and the sum is 6"));
    assert!(text.contains("minimal value is -10 (feature named 'min')"));
    assert!(text.contains("maximum value is 10 (for the feature with name 'MAX')"));
    assert!(text.contains("average value is 0 and the sum is 0"));
}

#[test]
fn test_describes_vector_details_when_unnamed() {
    let text = text_for(&[vector_layer_without_names()]);
    assert!(text.contains("1 layer."));
    assert!(text.contains("'scribble'"));
    assert!(text.contains("the value is 1"));
    assert!(!text.contains("named"));
    assert!(!text.contains("with name"));
}

#[test]
fn test_vector_layer_without_statistics() {
    let text = text_for(&[vector_layer((0, 0, 0, 5), Vec::<(&'static str, Statistic)>::new())]);
    assert!(text.contains("contains 5 features"));
    assert!(text.contains("0 (0%) intersect"));
    assert!(text.contains("rendered was 0 (0%) features"));
    assert!(!text.contains("statistical"));
}

// ============================================================================
// WMS Layers
// ============================================================================

#[test]
fn test_describes_single_wms_layer() {
    let text = text_for(&[single_wms_layer_with("Title of a", "The abstract of a")]);
    assert!(!text.contains("composition"));
    assert!(text.contains("\"a\" ("));
    assert!(text.contains("title: \"Title of a\""));
    assert!(text.contains("abstract: \"The abstract of a\""));
}

#[test]
fn test_describes_multi_wms_layer() {
    let text = text_for(&[wms_layer(&[
        ("a", "Title of a", "The abstract of a"),
        ("b", "Title of b", "The abstract of b"),
    ])]);
    assert!(text.contains("composition of 2"));
    assert!(text.contains("\"a\" ("));
    assert!(text.contains("title: \"Title of a\""));
    assert!(text.contains("abstract: \"The abstract of a\""));
    assert!(text.contains("\"b\" ("));
    assert!(text.contains("title: \"Title of b\""));
    assert!(text.contains("abstract: \"The abstract of b\""));
}

#[test]
fn test_wms_without_redundancy_when_all_equal_name() {
    let text = text_for(&[single_wms_layer_with("a", "a")]);
    assert!(!text.contains("composition"));
    assert!(text.contains("\"a\""));
    assert!(!text.contains("\"a\" ("));
    assert!(!text.contains("title: "));
    assert!(!text.contains("abstract: "));
}

#[test]
fn test_wms_without_redundancy_when_title_equals_abstract() {
    let text = text_for(&[single_wms_layer_with("Humba", "Humba")]);
    assert!(!text.contains("composition"));
    assert!(text.contains("\"a\" ("));
    assert!(!text.contains("title: "));
    assert!(text.contains("title/abstract: "));
}

#[test]
fn test_wms_with_empty_abstract() {
    let text = text_for(&[single_wms_layer_with("Title of a", "")]);
    assert!(!text.contains("composition"));
    assert!(text.contains("\"a\" ("));
    assert!(text.contains("title: "));
    assert!(!text.contains("abstract: "));
}

#[test]
fn test_wms_with_empty_title() {
    let text = text_for(&[single_wms_layer_with("", "The abstract of a")]);
    assert!(!text.contains("composition"));
    assert!(text.contains("\"a\" ("));
    assert!(!text.contains("title: "));
    assert!(text.contains("abstract: "));
}

#[test]
fn test_wms_service_metadata_is_mentioned() {
    let text = text_for(&[single_wms_layer_with("Title of a", "The abstract of a")]);
    assert!(text.contains("Foo"));
    assert!(text.contains("Foo Abstract"));
    assert!(text.contains("\"Service keyword 1\" and \"Service keyword 2\""));
    assert!(text.contains("The title of layer-number-1"));
    assert!(text.contains("The abstract of layer-number-1"));
    assert!(!text.contains("example.com"));
}

#[test]
fn test_wms_short_sequences_read_as_empty() {
    let mut details = wms_details(&[("a", "A", ""), ("b", "B", "")]);
    details.wms_layer_titles.pop();
    let layer = LayerDescription::new(LayerType::Image, SourceType::ImageWms).with_details(details);

    let text = text_for(&[layer]);
    assert!(text.contains("composition of 2"));
    assert!(text.contains("\"a\" (title: \"A\")"));
    assert!(text.contains("\"b\"."));
    assert!(!text.contains("\"b\" ("));
}

#[test]
fn test_wms_json_with_names_only() -> anyhow::Result<()> {
    let parsed = parse_descriptions(
        r#"[{
            "type": "tile-layer",
            "source": "TileWMS-source",
            "details": { "wmsLayerNames": ["a", "b"], "serviceTitle": "Foo" }
        }]"#,
    )?;
    assert!(matches!(parsed[0].details, Some(LayerDetails::Wms(_))));

    let text = describe_layers(&parsed).concat();
    assert!(text.contains("composition of 2"));
    assert!(text.contains("\"a\" and \"b\"."));
    assert!(text.contains("The service is called \"Foo\"."));
    assert!(!text.contains("title: "));
    Ok(())
}

#[test]
fn test_wms_json_without_metadata_urls() -> anyhow::Result<()> {
    let parsed = parse_descriptions(
        r#"[{
            "type": "tile-layer",
            "source": "TileWMS-source",
            "details": {
                "serviceTitle": "Foo",
                "wmsLayerNames": ["a"],
                "wmsLayerTitles": ["Title of a"],
                "wmsLayerAbstracts": ["The abstract of a"]
            }
        }]"#,
    )?;

    let text = Describer::with_config(DescriberConfig {
        include_metadata_urls: true,
        ..Default::default()
    })
    .describe_to_string(&parsed);
    assert!(!text.contains("composition"));
    assert!(text.contains("\"a\" (title: \"Title of a\", abstract: \"The abstract of a\")."));
    assert!(!text.contains("metadata at"));
    Ok(())
}

// ============================================================================
// Purity and JSON Input
// ============================================================================

#[test]
fn test_describe_is_idempotent() {
    let layers = vec![
        tile_layer_basic(),
        vector_layer_more_features(),
        single_wms_layer_with("Humba", "Humba"),
    ];
    let describer = Describer::with_config(DescriberConfig {
        include_metadata_urls: true,
        ..Default::default()
    });

    let first = describer.describe(&layers);
    let second = describer.describe(&layers);
    assert_eq!(first, second);
    assert!(first.concat().contains("metadata at http://www.example.com/metadata/a.xml"));
}

#[test]
fn test_describer_is_shareable_across_threads() {
    let describer = std::sync::Arc::new(Describer::new());
    let layers = vec![vector_layer_with_details()];
    let expected = describer.describe(&layers);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let describer = describer.clone();
            let layers = layers.clone();
            std::thread::spawn(move || describer.describe(&layers))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_json_input_matches_typed_input() -> anyhow::Result<()> {
    let json = r#"[
        {
            "type": "vector-layer",
            "source": "Vector-source",
            "details": {
                "numFeaturesInExtent": 4,
                "numRenderedFeaturesInExtent": 3,
                "numSkippedFeaturesInExtent": 1,
                "numTotalFeaturesInSource": 8,
                "renderedStatistics": {
                    "someProp": { "min": 1, "minName": "min value", "max": 3, "maxName": "MAX VALUE", "avg": 2, "sum": 6 },
                    "anotherOne": { "min": -10, "minName": "min", "max": 10, "maxName": "MAX", "avg": 0, "sum": 0 }
                }
            }
        },
        {
            "type": "tile-layer",
            "source": "TileWMS-source",
            "details": {
                "serviceAbstract": "Foo Abstract",
                "serviceKeywords": ["Service keyword 1", "Service keyword 2"],
                "serviceTitle": "Foo",
                "topLevelLayerAbstract": "The abstract of layer-number-1",
                "topLevelLayerTitle": "The title of layer-number-1",
                "wmsLayerNames": ["a"],
                "wmsLayerAbstracts": ["The abstract of a"],
                "wmsLayerTitles": ["Title of a"],
                "wmsLayerMetadataURLs": ["http://www.example.com/metadata/a.xml"]
            }
        }
    ]"#;

    let parsed = parse_descriptions(json)?;
    let typed = vec![
        vector_layer_more_features(),
        single_wms_layer_with("Title of a", "The abstract of a"),
    ];

    assert_eq!(parsed, typed);
    assert_eq!(describe_layers(&parsed), describe_layers(&typed));
    Ok(())
}

#[test]
fn test_json_unrecognized_details_degrade() -> anyhow::Result<()> {
    let parsed = parse_descriptions(
        r#"[{ "type": "heatmap-layer", "source": "Vector-source", "details": { "blur": 15 } }]"#,
    )?;
    assert!(matches!(parsed[0].details, Some(LayerDetails::Unrecognized(_))));

    let text = describe_layers(&parsed).concat();
    assert_eq!(
        text,
        "The map consists of 1 layer. \
         The layer is of type heatmap-layer and uses a source of type Vector-source."
    );
    Ok(())
}
