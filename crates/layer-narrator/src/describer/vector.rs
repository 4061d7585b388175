//! Feature counts and rendered-feature statistics of vector layers.

use layer_narrator_core::{Statistic, VectorLayerDetails};

use super::wording::{format_number, percentage, pluralize, single_quoted_list};
use crate::config::DescriberConfig;

/// Append the fragments describing a vector layer's details.
pub(crate) fn describe(details: &VectorLayerDetails, config: &DescriberConfig, out: &mut Vec<String>) {
    out.push(feature_counts(details));
    out.push(rendered_counts(details, config));

    let stats = &details.rendered_statistics;
    if stats.is_empty() {
        return;
    }

    let noun = if stats.len() == 1 {
        "property"
    } else {
        "properties"
    };
    out.push(format!(
        " For the rendered features, basic statistical information is available for the {} {}.",
        noun,
        single_quoted_list(stats.properties())
    ));

    let simplify = stats.len() == 1;
    for (property, statistic) in stats.iter() {
        if simplify && statistic.is_uniform() {
            out.push(uniform_statistic(property, statistic));
        } else {
            out.push(full_statistic(property, statistic));
        }
    }
}

fn feature_counts(details: &VectorLayerDetails) -> String {
    let total = details.num_total_features_in_source;
    let in_extent = details.num_features_in_extent;
    format!(
        " Its source contains {} {}, of which {} ({}%) intersect the current map extent.",
        total,
        pluralize(total, "feature", "features"),
        in_extent,
        percentage(in_extent, total)
    )
}

fn rendered_counts(details: &VectorLayerDetails, config: &DescriberConfig) -> String {
    let rendered = details.num_rendered_features_in_extent;
    let skipped = details.num_skipped_features_in_extent;

    let mut text = format!(
        " Of those, the amount rendered was {} ({}%) {}",
        rendered,
        percentage(rendered, details.num_features_in_extent),
        pluralize(rendered, "feature", "features")
    );
    if config.mention_skipped_features && skipped > 0 {
        text.push_str(&format!(
            ", while {} {} skipped",
            skipped,
            pluralize(skipped, "was", "were")
        ));
    }
    text.push('.');
    text
}

fn uniform_statistic(property: &str, statistic: &Statistic) -> String {
    let mut text = format!(" For '{}' the value is {}", property, format_number(statistic.min));
    if let Some(name) = statistic.min_name().or_else(|| statistic.max_name()) {
        text.push_str(&format!(" (feature named '{}')", name));
    }
    text.push_str(&format!(" and the sum is {}.", format_number(statistic.sum)));
    text
}

fn full_statistic(property: &str, statistic: &Statistic) -> String {
    let mut text = format!(
        " For '{}' the minimal value is {}",
        property,
        format_number(statistic.min)
    );
    if let Some(name) = statistic.min_name() {
        text.push_str(&format!(" (feature named '{}')", name));
    }

    text.push_str(&format!(", the maximum value is {}", format_number(statistic.max)));
    if let Some(name) = statistic.max_name() {
        text.push_str(&format!(" (for the feature with name '{}')", name));
    }

    text.push_str(&format!(
        ", the average value is {} and the sum is {}.",
        format_number(statistic.avg),
        format_number(statistic.sum)
    ));
    text
}
