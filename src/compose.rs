use serde::Deserialize;

use crate::data::model::{Layer, PlotLayerSet};

// ---------------------------------------------------------------------------
// z-order
// ---------------------------------------------------------------------------

/// How a layer's list position maps to its draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZOrderScheme {
    /// `2*base + 3 + index`: leaves room below for earlier plots on the axis.
    #[default]
    Stacked,
    /// `base + 1 + index`.
    Sequential,
}

impl ZOrderScheme {
    pub fn z_order(self, base: i32, index: usize) -> i32 {
        match self {
            ZOrderScheme::Stacked => z_order(base, index),
            ZOrderScheme::Sequential => base + 1 + index as i32,
        }
    }
}

/// Draw order of the layer at `index` on an axis with z-order base `base`.
///
/// `base` must lie within [`Z_BASE_LIMIT`](crate::config::Z_BASE_LIMIT);
/// `PlotConfig::validate` enforces this.
pub fn z_order(base: i32, index: usize) -> i32 {
    base * 2 + 3 + index as i32
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct ComposedLayer<'a> {
    pub layer: &'a Layer,
    pub z: i32,
}

/// Layers sorted by ascending z (the order to draw them in) and the z-order
/// reserved for the legend, which sits above every layer.
#[derive(Debug, Clone)]
pub struct Composition<'a> {
    pub layers: Vec<ComposedLayer<'a>>,
    pub legend_z: i32,
}

/// Assign every layer its z-order. The first listed layer is drawn lowest
/// unless `reverse` is set.
pub fn compose(set: &PlotLayerSet, scheme: ZOrderScheme, reverse: bool) -> Composition<'_> {
    let n = set.layers.len();
    let mut layers: Vec<ComposedLayer<'_>> = set
        .layers
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let position = if reverse { n - 1 - i } else { i };
            ComposedLayer {
                layer,
                z: scheme.z_order(set.z_base, position),
            }
        })
        .collect();
    layers.sort_by_key(|c| c.z);

    let legend_z = scheme.z_order(set.z_base, n) + 1;
    for c in &layers {
        log::debug!("z={} {}", c.z, c.layer.label);
    }
    Composition { layers, legend_z }
}
