// The chart documents handed to the renderer, in the plotly figure format.

use readiness_charts::{Dimension, RadialAxis, Series};
use serde_json::json;
use serde_json::Value as JSValue;

fn image_export_config() -> JSValue {
    json!({
        "toImageButtonOptions": {
            "format": "png",
            "filename": "custom_image",
            "height": 1000,
            "width": 1800,
            "scale": 1
        }
    })
}

/// One closed polygon per series over the question categories.
///
/// The angular axis lists all the categories, so that the polygons of groups
/// with missing answers stay aligned with the others.
pub fn radar_figure(series: &[Series], categories: &[String], axis: &RadialAxis) -> JSValue {
    let traces: Vec<JSValue> = series
        .iter()
        .map(|s| {
            let r: Vec<i64> = s.entries.iter().map(|e| e.code).collect();
            let theta: Vec<&str> = s.entries.iter().map(|e| e.category.as_str()).collect();
            let text: Vec<&str> = s.entries.iter().map(|e| e.label.as_str()).collect();
            json!({
                "type": "scatterpolar",
                "name": s.group_id,
                "r": r,
                "theta": theta,
                "text": text,
                "fill": "toself",
                "hoverinfo": "text"
            })
        })
        .collect();

    json!({
        "data": traces,
        "layout": {
            "polar": {
                "radialaxis": {
                    "visible": true,
                    "tickmode": "array",
                    "tickvals": axis.tick_values,
                    "ticktext": axis.tick_labels,
                    "range": [axis.range.0, axis.range.1]
                },
                "angularaxis": {
                    "direction": "clockwise",
                    "categoryorder": "array",
                    "categoryarray": categories
                }
            },
            "showlegend": false,
            "font": { "size": 24 }
        },
        "config": image_export_config()
    })
}

/// One axis per dimension and one polyline per line of the dimensions.
///
/// The lines are colored by their index. The group of each line is kept in
/// `meta.groups` for labelling.
pub fn parallel_figure(dims: &[Dimension], axis: &RadialAxis) -> JSValue {
    let groups: Vec<&str> = dims
        .first()
        .map(|d| d.values.iter().map(|v| v.group_id.as_str()).collect())
        .unwrap_or_default();
    let colors: Vec<usize> = (0..groups.len()).collect();

    let dimensions: Vec<JSValue> = dims
        .iter()
        .map(|d| {
            let values: Vec<Option<i64>> = d.values.iter().map(|v| v.code).collect();
            json!({
                "label": d.label,
                "range": [d.range.0, d.range.1],
                "tickvals": axis.tick_values,
                "ticktext": axis.tick_labels,
                "values": values
            })
        })
        .collect();

    json!({
        "data": [{
            "type": "parcoords",
            "line": {
                "color": colors,
                "colorscale": [[0, "purple"], [0.5, "lightseagreen"], [1, "gold"]]
            },
            "dimensions": dimensions,
            "meta": { "groups": groups }
        }],
        "layout": {
            "plot_bgcolor": "white",
            "paper_bgcolor": "white"
        }
    })
}
