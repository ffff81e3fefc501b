use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::compose::Composition;
use crate::config::PlotConfig;
use crate::error::{ExclusionError, Result};
use crate::units::masses_to_frequencies;

use super::clip::{clip_polygon, clip_polyline, LogBox};
use super::{rgb, sci_label, write_figure, Figure};

const LEGEND_FONT: f64 = 15.0;
const LEGEND_ROW: i32 = 22;

// ---------------------------------------------------------------------------
// Output naming
// ---------------------------------------------------------------------------

/// Files written for a plot whose legend sits at z-order `legend_z`.
///
/// With a legend only the raster is written (`…_legend.png`); without one both
/// `.png` and `.svg` are written.
pub fn figure_paths(
    output_dir: &Path,
    legend_z: i32,
    plot_name: &str,
    show_legend: bool,
) -> Vec<PathBuf> {
    let stem = format!("img{legend_z}{plot_name}");
    if show_legend {
        vec![output_dir.join(format!("{stem}_legend.png"))]
    } else {
        vec![
            output_dir.join(format!("{stem}.png")),
            output_dir.join(format!("{stem}.svg")),
        ]
    }
}

/// Render the composed plot to disk and return the written paths.
pub fn save_figure(
    composition: &Composition<'_>,
    config: &PlotConfig,
    value_floor: f64,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&config.output_dir).map_err(|e| {
        ExclusionError::Render(format!("creating {}: {e}", config.output_dir.display()))
    })?;

    let view = ExclusionFigure {
        composition,
        config,
        value_floor,
    };
    let size = (config.figure.width, config.figure.height);
    let paths = figure_paths(
        &config.output_dir,
        composition.legend_z,
        config.plot_name(),
        config.show_legend,
    );
    for path in &paths {
        write_figure(path, size, &view)?;
    }
    Ok(paths)
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

struct ExclusionFigure<'a> {
    composition: &'a Composition<'a>,
    config: &'a PlotConfig,
    value_floor: f64,
}

impl Figure for ExclusionFigure<'_> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        root.fill(&WHITE).map_err(ExclusionError::render)?;

        let (width, _) = root.dim_in_pixel();
        let (chart_area, legend_area) = if self.config.show_legend {
            let (chart, legend) = root.split_horizontally(width as i32 * 3 / 4);
            (chart, Some(legend))
        } else {
            (root.clone(), None)
        };

        self.draw_chart(&chart_area)?;
        if let Some(area) = legend_area {
            self.draw_legend(&area)?;
        }
        Ok(())
    }
}

impl ExclusionFigure<'_> {
    fn draw_chart<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<()> {
        let b = self.config.axis_bounds;
        let ymin = self.value_floor;
        let ghz = masses_to_frequencies(&[b.xmin, b.xmax]);

        let mut chart = ChartBuilder::on(area)
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 80)
            .set_label_area_size(LabelAreaPosition::Bottom, 50)
            .set_label_area_size(LabelAreaPosition::Top, 50)
            .build_cartesian_2d((b.xmin..b.xmax).log_scale(), (ymin..b.ymax).log_scale())
            .map_err(ExclusionError::render)?
            .set_secondary_coord(
                (ghz[0]..ghz[1]).log_scale(),
                (ymin..b.ymax).log_scale(),
            );

        chart
            .configure_mesh()
            .x_desc("Mass (µeV)")
            .y_desc("χ")
            .x_label_formatter(&sci_label)
            .y_label_formatter(&sci_label)
            .draw()
            .map_err(ExclusionError::render)?;
        chart
            .configure_secondary_axes()
            .x_desc("Frequency (GHz)")
            .x_label_formatter(&sci_label)
            .draw()
            .map_err(ExclusionError::render)?;

        let visible = LogBox::new(b.xmin, b.xmax, ymin, b.ymax);
        for composed in &self.composition.layers {
            let color = rgb(composed.layer.color);
            let points: Vec<(f64, f64)> = composed.layer.region.points().collect();

            if self.config.fill_regions {
                let clipped = clip_polygon(&points, &visible);
                if clipped.len() < 3 {
                    continue;
                }
                chart
                    .draw_series(std::iter::once(Polygon::new(clipped, color.filled())))
                    .map_err(ExclusionError::render)?;
            } else {
                let mut outline = points;
                if let Some(&first) = outline.first() {
                    outline.push(first);
                }
                for run in clip_polyline(&outline, &visible) {
                    chart
                        .draw_series(LineSeries::new(run, color.stroke_width(2)))
                        .map_err(ExclusionError::render)?;
                }
            }
        }
        Ok(())
    }

    /// Swatch + label per layer, in draw order, beside the chart.
    fn draw_legend<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<()> {
        let font = TextStyle::from(FontDesc::new(FontFamily::SansSerif, LEGEND_FONT, FontStyle::Normal));
        for (i, composed) in self.composition.layers.iter().enumerate() {
            let y = 40 + i as i32 * LEGEND_ROW;
            let color = rgb(composed.layer.color);
            let style = if self.config.fill_regions {
                color.filled()
            } else {
                color.stroke_width(2)
            };
            area.draw(&Rectangle::new([(10, y), (36, y + 14)], style))
                .map_err(ExclusionError::render)?;
            area.draw(&Text::new(composed.layer.label.clone(), (44, y), font.clone()))
                .map_err(ExclusionError::render)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{compose, ZOrderScheme};
    use crate::data::model::{ClosedRegion, Layer, PlotLayerSet};
    use crate::render::value_floor;
    use eframe::egui::Color32;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        p.push(format!("exclusion-plot-{}-{}-{}", name, std::process::id(), nanos));
        p
    }

    /// Two regions closed at the default ceiling, which lies above `ymax`,
    /// and one running past the upper mass bound.
    fn layer_set() -> PlotLayerSet {
        let region = |masses: Vec<f64>, values: Vec<f64>| ClosedRegion { masses, values };
        PlotLayerSet::new(
            vec![
                Layer {
                    region: region(
                        vec![1e-3, 1e-3, 1e-1, 1e1, 1e1],
                        vec![10.0, 1e-6, 1e-8, 1e-5, 10.0],
                    ),
                    label: "Arias calculations".into(),
                    color: Color32::LIGHT_GRAY,
                },
                Layer {
                    region: region(
                        vec![1e10, 1e10, 1e15, 1e18, 1e18],
                        vec![10.0, 1e-2, 1e-4, 1e-3, 10.0],
                    ),
                    label: "EW".into(),
                    color: Color32::from_rgb(255, 0, 255),
                },
            ],
            -1,
        )
    }

    #[test]
    fn legend_figure_is_a_single_png() {
        let paths = figure_paths(Path::new("plots"), 19, "full_range", true);
        assert_eq!(paths, vec![PathBuf::from("plots/img19full_range_legend.png")]);
    }

    #[test]
    fn save_figure_writes_png_and_svg() {
        let root = tmp_dir("figure");
        let set = layer_set();
        for fill_regions in [true, false] {
            let config = PlotConfig {
                show_legend: false,
                full_range: false,
                fill_regions,
                output_dir: root.clone(),
                ..Default::default()
            };
            let composition = compose(&set, ZOrderScheme::Stacked, false);
            let paths = save_figure(&composition, &config, value_floor(&set, &config)).unwrap();

            assert_eq!(
                paths,
                vec![root.join("img4cropped.png"), root.join("img4cropped.svg")]
            );
            for path in &paths {
                let len = std::fs::metadata(path).unwrap().len();
                assert!(len > 0, "{} is empty", path.display());
            }
        }
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn bare_figure_is_png_and_svg() {
        let paths = figure_paths(Path::new("out"), 7, "cropped", false);
        assert_eq!(
            paths,
            vec![PathBuf::from("out/img7cropped.png"), PathBuf::from("out/img7cropped.svg")]
        );
    }
}
