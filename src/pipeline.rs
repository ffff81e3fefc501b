use std::path::PathBuf;

use crate::compose::compose;
use crate::config::PlotConfig;
use crate::data::catalog::discover;
use crate::data::loader::load_layer_set;
use crate::data::model::PlotLayerSet;
use crate::error::Result;
use crate::render::{save_figure, value_floor};

/// Discover the configured catalog and load every curve.
pub fn load(config: &PlotConfig) -> Result<PlotLayerSet> {
    let discovery = discover(&config.data_dir, config.full_range);
    load_layer_set(&discovery, config)
}

/// Compose `set` and write the figure files.
pub fn save(set: &PlotLayerSet, config: &PlotConfig) -> Result<Vec<PathBuf>> {
    let composition = compose(set, config.z_scheme, config.reverse_order);
    save_figure(&composition, config, value_floor(set, config))
}
