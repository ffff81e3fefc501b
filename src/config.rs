use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::compose::ZOrderScheme;
use crate::data::region::DEFAULT_CEILING;
use crate::error::{ExclusionError, Result};
use crate::units::frequencies_to_masses;

/// Largest `|z_base|` for which every z-order of a plot fits in an `i32`.
pub const Z_BASE_LIMIT: i32 = i32::MAX / 4;

// ---------------------------------------------------------------------------
// Plot configuration
// ---------------------------------------------------------------------------

/// Everything that shapes one plot. Built once at start-up (defaults, then an
/// optional JSON file, then CLI flags) and passed to the composer explicitly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub show_legend: bool,
    pub persist_to_disk: bool,
    /// Fill regions; `false` draws outlines only.
    pub fill_regions: bool,
    pub ceiling: f64,
    pub axis_bounds: AxisBounds,
    /// Lower value limit; derived from the data when absent.
    pub ymin: Option<f64>,
    pub z_base: i32,
    pub z_scheme: ZOrderScheme,
    /// Give the first listed experiment the highest z-order instead.
    pub reverse_order: bool,
    pub full_range: bool,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub figure: FigureConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            show_legend: true,
            persist_to_disk: true,
            fill_regions: true,
            ceiling: DEFAULT_CEILING,
            axis_bounds: AxisBounds::default(),
            ymin: None,
            z_base: -1,
            z_scheme: ZOrderScheme::default(),
            reverse_order: false,
            full_range: true,
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("plots"),
            figure: FigureConfig::default(),
        }
    }
}

/// Mass limits (µeV) and the upper value limit.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AxisBounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self {
            xmin: 5e-10,
            xmax: 5e16,
            ymax: 0.5,
        }
    }
}

/// Raster size of written figures, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 760,
        }
    }
}

impl PlotConfig {
    /// Read a JSON config; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ExclusionError::MissingFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: PlotConfig =
            serde_json::from_str(text).map_err(|e| ExclusionError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject bounds a log-log axis cannot show.
    pub fn validate(&self) -> Result<()> {
        let b = &self.axis_bounds;
        if !(b.xmin > 0.0 && b.xmin < b.xmax && b.xmax.is_finite()) {
            return Err(ExclusionError::Config(format!(
                "mass bounds must satisfy 0 < xmin < xmax, got {}..{}",
                b.xmin, b.xmax
            )));
        }
        if !(b.ymax > 0.0 && b.ymax.is_finite()) {
            return Err(ExclusionError::Config(format!("ymax must be positive, got {}", b.ymax)));
        }
        if let Some(ymin) = self.ymin {
            if !(ymin > 0.0 && ymin < b.ymax) {
                return Err(ExclusionError::Config(format!(
                    "ymin must satisfy 0 < ymin < ymax, got {ymin}"
                )));
            }
        }
        if !(self.ceiling > 0.0 && self.ceiling.is_finite()) {
            return Err(ExclusionError::Config(format!(
                "ceiling must be positive, got {}",
                self.ceiling
            )));
        }
        if self.z_base.unsigned_abs() > Z_BASE_LIMIT.unsigned_abs() {
            return Err(ExclusionError::Config(format!(
                "z_base must be within ±{Z_BASE_LIMIT}, got {}",
                self.z_base
            )));
        }
        if self.figure.width == 0 || self.figure.height == 0 {
            return Err(ExclusionError::Config("figure size must be non-zero".into()));
        }
        Ok(())
    }

    /// Set the mass bounds from a frequency window given in GHz.
    pub fn set_frequency_window(&mut self, lo_ghz: f64, hi_ghz: f64) {
        if let [xmin, xmax] = frequencies_to_masses(&[lo_ghz, hi_ghz])[..] {
            self.axis_bounds.xmin = xmin;
            self.axis_bounds.xmax = xmax;
        }
    }

    /// Identifier used in output file names.
    pub fn plot_name(&self) -> &'static str {
        if self.full_range {
            "full_range"
        } else {
            "cropped"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_full_range_plot() {
        let c = PlotConfig::default();
        assert!(c.show_legend && c.persist_to_disk && c.fill_regions);
        assert_eq!(c.ceiling, 10.0);
        assert_eq!(c.axis_bounds, AxisBounds { xmin: 5e-10, xmax: 5e16, ymax: 0.5 });
        assert_eq!(c.z_base, -1);
        assert_eq!(c.z_scheme, ZOrderScheme::Stacked);
        assert_eq!(c.plot_name(), "full_range");
        c.validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = PlotConfig::from_json(
            r#"{ "show_legend": false, "axis_bounds": { "xmax": 1e6 }, "z_scheme": "sequential" }"#,
        )
        .unwrap();
        assert!(!c.show_legend);
        assert_eq!(c.axis_bounds.xmin, 5e-10);
        assert_eq!(c.axis_bounds.xmax, 1e6);
        assert_eq!(c.z_scheme, ZOrderScheme::Sequential);
        assert_eq!(c.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn malformed_or_invalid_config_is_rejected() {
        assert!(matches!(
            PlotConfig::from_json("{ not json"),
            Err(ExclusionError::Config(_))
        ));
        assert!(matches!(
            PlotConfig::from_json(r#"{ "axis_bounds": { "xmin": 10.0, "xmax": 1.0 } }"#),
            Err(ExclusionError::Config(_))
        ));
        assert!(matches!(
            PlotConfig::from_json(r#"{ "ymin": 1.0 }"#),
            Err(ExclusionError::Config(_))
        ));
        assert!(matches!(
            PlotConfig::from_json(r#"{ "ceiling": -1.0 }"#),
            Err(ExclusionError::Config(_))
        ));
    }

    #[test]
    fn frequency_window_sets_mass_bounds() {
        let mut c = PlotConfig::default();
        c.set_frequency_window(1.0, 10.0);
        approx::assert_relative_eq!(c.axis_bounds.xmin, 4.135667696, max_relative = 1e-12);
        approx::assert_relative_eq!(c.axis_bounds.xmax, 41.35667696, max_relative = 1e-12);
        assert_eq!(c.axis_bounds.ymax, 0.5);
        c.validate().unwrap();

        c.set_frequency_window(10.0, 1.0);
        assert!(c.validate().is_err());
    }

    #[test]
    fn out_of_range_z_base_is_rejected() {
        assert!(matches!(
            PlotConfig::from_json(r#"{ "z_base": 2000000000 }"#),
            Err(ExclusionError::Config(_))
        ));
        assert!(matches!(
            PlotConfig::from_json(&format!(r#"{{ "z_base": {} }}"#, i32::MIN)),
            Err(ExclusionError::Config(_))
        ));
        let c = PlotConfig::from_json(&format!(r#"{{ "z_base": {} }}"#, -Z_BASE_LIMIT)).unwrap();
        assert_eq!(c.z_base, -Z_BASE_LIMIT);
    }

    #[test]
    fn missing_config_file() {
        let err = PlotConfig::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ExclusionError::MissingFile { .. }));
    }
}
