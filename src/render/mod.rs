/// Static figure export with plotters.
///
/// ```text
///   Composition ──► figure   log-log chart, GHz top axis, legend panel
///   ClosedRegion ─► preview  fill + outline + markers for one data file
///                      │
///                      ▼
///               write_figure  .png → BitMapBackend, .svg → SVGBackend
/// ```
pub mod clip;
pub mod figure;
pub mod preview;

use std::path::Path;

use eframe::egui::Color32;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::PlotConfig;
use crate::data::model::PlotLayerSet;
use crate::error::{ExclusionError, Result};

pub use figure::save_figure;
pub use preview::save_region_preview;

/// Something that can be drawn onto any plotters backend.
pub trait Figure {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>;
}

/// Draw `figure` to `path`; the extension picks raster (`png`) or vector (`svg`).
pub fn write_figure(path: &Path, size: (u32, u32), figure: &impl Figure) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "png" => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            figure.draw(&root)?;
            root.present().map_err(ExclusionError::render)?;
        }
        "svg" => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            figure.draw(&root)?;
            root.present().map_err(ExclusionError::render)?;
        }
        other => {
            return Err(ExclusionError::Render(format!(
                "unsupported figure format: .{other}"
            )))
        }
    }
    log::info!("Wrote {}", path.display());
    Ok(())
}

pub(crate) fn rgb(c: Color32) -> RGBColor {
    RGBColor(c.r(), c.g(), c.b())
}

/// Tick label in the `1e-6` style matplotlib uses on log axes.
pub(crate) fn sci_label(v: &f64) -> String {
    format!("{v:.0e}")
}

/// Lower value limit: the configured one, else the decade below the smallest
/// plotted value. Always strictly below `ymax`.
pub fn value_floor(set: &PlotLayerSet, config: &PlotConfig) -> f64 {
    let ymax = config.axis_bounds.ymax;
    config.ymin.unwrap_or_else(|| {
        set.min_positive_value()
            .map(|v| 10f64.powf(v.log10().floor()))
            .filter(|v| *v < ymax)
            .unwrap_or(ymax * 1e-10)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ClosedRegion, Layer};
    use approx::assert_relative_eq;

    fn set_with_min(v: f64) -> PlotLayerSet {
        PlotLayerSet::new(
            vec![Layer {
                region: ClosedRegion {
                    masses: vec![1.0, 1.0, 2.0, 2.0],
                    values: vec![10.0, v, v * 2.0, 10.0],
                },
                label: "x".into(),
                color: Color32::BLACK,
            }],
            0,
        )
    }

    #[test]
    fn floor_is_decade_below_smallest_value() {
        let config = PlotConfig::default();
        assert_relative_eq!(value_floor(&set_with_min(3.2e-12), &config), 1e-12, max_relative = 1e-12);
    }

    #[test]
    fn configured_floor_wins() {
        let config = PlotConfig { ymin: Some(1e-5), ..Default::default() };
        assert_eq!(value_floor(&set_with_min(3.2e-12), &config), 1e-5);
    }

    #[test]
    fn floor_stays_below_ymax() {
        let config = PlotConfig::default();
        let empty = PlotLayerSet::new(Vec::new(), 0);
        assert_relative_eq!(value_floor(&empty, &config), 0.5e-10, max_relative = 1e-12);
        // Every value above ymax.
        assert_relative_eq!(value_floor(&set_with_min(5.0), &config), 0.5e-10, max_relative = 1e-12);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        struct Blank;
        impl Figure for Blank {
            fn draw<DB: DrawingBackend>(&self, _root: &DrawingArea<DB, Shift>) -> Result<()> {
                Ok(())
            }
        }
        let err = write_figure(Path::new("figure.gif"), (10, 10), &Blank).unwrap_err();
        assert!(matches!(err, ExclusionError::Render(_)));
    }

    #[test]
    fn labels() {
        assert_eq!(sci_label(&1e-6), "1e-6");
        assert_eq!(sci_label(&5e16), "5e16");
        let c = rgb(Color32::from_rgb(1, 2, 3));
        assert_eq!((c.0, c.1, c.2), (1, 2, 3));
    }
}
