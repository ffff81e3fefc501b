use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::config::FigureConfig;
use crate::data::model::ClosedRegion;
use crate::error::{ExclusionError, Result};

use super::{sci_label, write_figure, Figure};

const FILL: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const OUTLINE: RGBColor = RGBColor(0xff, 0x7f, 0x0e);
const MARKER: RGBColor = RGBColor(0x2c, 0xa0, 0x2c);

/// Debug view of a single data file: filled region, its outline, and every
/// vertex as a marker, on axes that fit the region.
pub fn save_region_preview(
    region: &ClosedRegion,
    label: &str,
    path: &Path,
    figure: FigureConfig,
) -> Result<()> {
    if region.is_empty() {
        return Err(ExclusionError::InvalidInput(format!("region '{label}' has no vertices")));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ExclusionError::Render(format!("creating {}: {e}", parent.display()))
        })?;
    }
    let preview = RegionPreview { region, label };
    write_figure(path, (figure.width, figure.height), &preview)
}

struct RegionPreview<'a> {
    region: &'a ClosedRegion,
    label: &'a str,
}

impl RegionPreview<'_> {
    /// Axis limits padded by a factor of two in every direction.
    fn limits(&self) -> Result<((f64, f64), (f64, f64))> {
        let (mlo, mhi) = self.region.mass_range();
        let vlo = self.region.min_positive_value();
        let vhi = self.region.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        match vlo {
            Some(vlo) if mlo > 0.0 => Ok(((mlo / 2.0, mhi * 2.0), (vlo / 2.0, vhi * 2.0))),
            _ => Err(ExclusionError::Render(format!(
                "region '{}' has no positive coordinates for a log-log axis",
                self.label
            ))),
        }
    }
}

impl Figure for RegionPreview<'_> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        let ((x0, x1), (y0, y1)) = self.limits()?;
        root.fill(&WHITE).map_err(ExclusionError::render)?;

        let mut chart = ChartBuilder::on(root)
            .margin(20)
            .caption(self.label, FontDesc::new(FontFamily::SansSerif, 24.0, FontStyle::Normal))
            .set_label_area_size(LabelAreaPosition::Left, 80)
            .set_label_area_size(LabelAreaPosition::Bottom, 50)
            .build_cartesian_2d((x0..x1).log_scale(), (y0..y1).log_scale())
            .map_err(ExclusionError::render)?;
        chart
            .configure_mesh()
            .x_desc("mass (µeV)")
            .y_desc("χ")
            .x_label_formatter(&sci_label)
            .y_label_formatter(&sci_label)
            .draw()
            .map_err(ExclusionError::render)?;

        let points: Vec<(f64, f64)> = self.region.points().collect();
        chart
            .draw_series(std::iter::once(Polygon::new(points.clone(), FILL.mix(0.6).filled())))
            .map_err(ExclusionError::render)?;
        chart
            .draw_series(LineSeries::new(points.iter().copied(), OUTLINE.stroke_width(2)))
            .map_err(ExclusionError::render)?;
        chart
            .draw_series(points.iter().map(|&p| Circle::new(p, 3, MARKER.filled())))
            .map_err(ExclusionError::render)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_pad_by_factor_two() {
        let region = ClosedRegion {
            masses: vec![2.0, 2.0, 8.0, 8.0],
            values: vec![10.0, 0.1, 0.4, 10.0],
        };
        let preview = RegionPreview { region: &region, label: "x" };
        let ((x0, x1), (y0, y1)) = preview.limits().unwrap();
        assert_eq!((x0, x1), (1.0, 16.0));
        assert_eq!((y0, y1), (0.05, 20.0));
    }

    #[test]
    fn single_point_region_still_has_width() {
        let region = ClosedRegion {
            masses: vec![3.0, 3.0, 3.0],
            values: vec![10.0, 1.0, 10.0],
        };
        let preview = RegionPreview { region: &region, label: "x" };
        let ((x0, x1), _) = preview.limits().unwrap();
        assert!(x0 < x1);
    }

    #[test]
    fn non_positive_masses_cannot_be_previewed() {
        let region = ClosedRegion {
            masses: vec![0.0, 0.0, 1.0, 1.0],
            values: vec![10.0, 1.0, 1.0, 10.0],
        };
        let preview = RegionPreview { region: &region, label: "x" };
        assert!(matches!(preview.limits(), Err(ExclusionError::Render(_))));
    }

    #[test]
    fn empty_region_is_rejected_before_touching_disk() {
        let region = ClosedRegion { masses: vec![], values: vec![] };
        let err = save_region_preview(
            &region,
            "empty",
            Path::new("/nonexistent/dir/preview.png"),
            FigureConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ExclusionError::InvalidInput(_)));
    }
}
