//! WMS capabilities metadata, with redundant titles and abstracts removed.

use std::fmt;

use layer_narrator_core::{WmsLayerDetails, WmsSubLayer};
use tracing::warn;

use super::wording::double_quoted_enumeration;
use crate::config::DescriberConfig;

/// How a single WMS sub-layer is rendered after redundancy suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubLayerRendering<'a> {
    /// Title and abstract are empty or repeat the name.
    Bare { name: &'a str },
    /// Title and abstract carry the same text.
    SharedText { name: &'a str, text: &'a str },
    TitleOnly { name: &'a str, title: &'a str },
    AbstractOnly { name: &'a str, abstract_text: &'a str },
    TitleAndAbstract {
        name: &'a str,
        title: &'a str,
        abstract_text: &'a str,
    },
}

impl<'a> SubLayerRendering<'a> {
    /// Choose the rendering for a sub-layer.
    ///
    /// Empty strings count as absent; a title or abstract equal to the name
    /// (case-sensitive) counts as absent too.
    pub fn select(layer: &WmsSubLayer<'a>) -> Self {
        let name = layer.name;
        let has_title = !layer.title.is_empty() && layer.title != name;
        let has_abstract = !layer.abstract_text.is_empty() && layer.abstract_text != name;

        match (has_title, has_abstract, layer.title == layer.abstract_text) {
            (false, false, _) => Self::Bare { name },
            (true, true, true) => Self::SharedText {
                name,
                text: layer.title,
            },
            (true, true, false) => Self::TitleAndAbstract {
                name,
                title: layer.title,
                abstract_text: layer.abstract_text,
            },
            (true, false, _) => Self::TitleOnly {
                name,
                title: layer.title,
            },
            (false, true, _) => Self::AbstractOnly {
                name,
                abstract_text: layer.abstract_text,
            },
        }
    }
}

impl fmt::Display for SubLayerRendering<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bare { name } => write!(f, "\"{}\"", name),
            Self::SharedText { name, text } => {
                write!(f, "\"{}\" (title/abstract: \"{}\")", name, text)
            }
            Self::TitleOnly { name, title } => write!(f, "\"{}\" (title: \"{}\")", name, title),
            Self::AbstractOnly {
                name,
                abstract_text,
            } => write!(f, "\"{}\" (abstract: \"{}\")", name, abstract_text),
            Self::TitleAndAbstract {
                name,
                title,
                abstract_text,
            } => write!(
                f,
                "\"{}\" (title: \"{}\", abstract: \"{}\")",
                name, title, abstract_text
            ),
        }
    }
}

/// Append the fragments describing a WMS-backed layer's details.
pub(crate) fn describe(details: &WmsLayerDetails, config: &DescriberConfig, out: &mut Vec<String>) {
    if details.has_length_mismatch() {
        warn!(
            names = details.wms_layer_names.len(),
            titles = details.wms_layer_titles.len(),
            abstracts = details.wms_layer_abstracts.len(),
            metadata_urls = details.wms_layer_metadata_urls.len(),
            "WMS sub-layer sequences differ in length, missing entries read as empty"
        );
    }

    describe_sub_layers(details, config, out);

    if config.include_service_metadata {
        describe_service(details, out);
    }
}

fn describe_sub_layers(details: &WmsLayerDetails, config: &DescriberConfig, out: &mut Vec<String>) {
    let count = details.sub_layer_count();
    if count == 0 {
        return;
    }

    if count == 1 {
        out.push(" It displays the WMS layer ".to_string());
    } else {
        out.push(format!(" It displays a composition of {} WMS layers: ", count));
    }

    for (index, layer) in details.sub_layers().enumerate() {
        let mut text = String::new();
        if index > 0 {
            text.push_str(if index + 1 == count { " and " } else { ", " });
        }
        text.push_str(&SubLayerRendering::select(&layer).to_string());
        if config.include_metadata_urls && !layer.metadata_url.is_empty() {
            text.push_str(&format!(" [metadata at {}]", layer.metadata_url));
        }
        if index + 1 == count {
            text.push('.');
        }
        out.push(text);
    }
}

fn describe_service(details: &WmsLayerDetails, out: &mut Vec<String>) {
    if let Some(clause) = title_and_abstract(&details.service_title, &details.service_abstract) {
        out.push(format!(" The service is {}.", clause));
    }

    let keywords: Vec<&str> = details
        .service_keywords
        .iter()
        .map(String::as_str)
        .filter(|k| !k.is_empty())
        .collect();
    if !keywords.is_empty() {
        let noun = if keywords.len() == 1 {
            "keyword is"
        } else {
            "keywords are"
        };
        out.push(format!(
            " Its {} {}.",
            noun,
            double_quoted_enumeration(keywords)
        ));
    }

    if let Some(clause) = title_and_abstract(
        &details.top_level_layer_title,
        &details.top_level_layer_abstract,
    ) {
        out.push(format!(" The top-level layer of the service is {}.", clause));
    }
}

/// `called "T" and described as "A"`, dropping empty or repeated parts.
fn title_and_abstract(title: &str, abstract_text: &str) -> Option<String> {
    let title = (!title.is_empty()).then_some(title);
    let abstract_text = (!abstract_text.is_empty() && Some(abstract_text) != title)
        .then_some(abstract_text);

    match (title, abstract_text) {
        (None, None) => None,
        (Some(t), None) => Some(format!("called \"{}\"", t)),
        (None, Some(a)) => Some(format!("described as \"{}\"", a)),
        (Some(t), Some(a)) => Some(format!("called \"{}\" and described as \"{}\"", t, a)),
    }
}
