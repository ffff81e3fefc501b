use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::PlotConfig;
use crate::data::model::PlotLayerSet;
use crate::pipeline;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Settings; the side panel edits these in place.
    pub config: PlotConfig,

    /// Loaded curves (None until a catalog loads successfully).
    pub layers: Option<PlotLayerSet>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Files written by the last save.
    pub saved: Vec<PathBuf>,
}

impl AppState {
    pub fn new(config: PlotConfig, layers: Option<PlotLayerSet>) -> Self {
        Self {
            config,
            layers,
            status_message: None,
            saved: Vec::new(),
        }
    }

    /// Re-read the catalog from `config.data_dir`. On failure the previous
    /// curves stay on screen.
    pub fn reload(&mut self) -> Result<()> {
        let set = pipeline::load(&self.config)
            .with_context(|| format!("loading curves from {}", self.config.data_dir.display()))?;
        log::info!("Loaded {} curves", set.len());
        self.layers = Some(set);
        self.status_message = None;
        Ok(())
    }

    /// Switch to another data directory and reload.
    pub fn set_data_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.config.data_dir = dir;
        self.reload()
    }

    /// Switch between the full and the cropped catalog. If the new catalog
    /// cannot be loaded the previous selection is restored, so the setting
    /// always matches the curves on screen.
    pub fn set_full_range(&mut self, full_range: bool) -> Result<()> {
        let previous = self.config.full_range;
        self.config.full_range = full_range;
        if let Err(e) = self.reload() {
            self.config.full_range = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Write the figure files for what is currently shown.
    pub fn save_figures(&mut self) -> Result<()> {
        let set = self.layers.as_ref().context("no curves loaded")?;
        self.saved = pipeline::save(set, &self.config).context("saving figures")?;
        self.status_message = Some(format!("Saved {} file(s)", self.saved.len()));
        Ok(())
    }

    /// Log a failed action and surface it in the status bar.
    pub fn report(&mut self, result: Result<()>) {
        if let Err(e) = result {
            log::error!("{e:#}");
            self.status_message = Some(format!("Error: {e:#}"));
        }
    }

    pub fn is_error(&self) -> bool {
        self.status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Error"))
    }
}
