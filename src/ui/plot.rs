use std::ops::RangeInclusive;

use eframe::egui::{Stroke, Ui};
use egui_plot::{
    AxisHints, Corner, GridInput, GridMark, Legend, Line, Plot, PlotPoints, Polygon, VPlacement,
};

use crate::compose::compose;
use crate::data::model::ClosedRegion;
use crate::render::value_floor;
use crate::state::AppState;
use crate::units::mass_to_frequency;

// ---------------------------------------------------------------------------
// Exclusion plot (central panel)
// ---------------------------------------------------------------------------

/// Render the exclusion plot in the central panel.
///
/// egui_plot has no log scale, so everything is plotted as log10 and the axis
/// formatters print `10^x`. The top axis shows the same marks in GHz.
pub fn exclusion_plot(ui: &mut Ui, state: &AppState) {
    let set = match &state.layers {
        Some(set) if !set.is_empty() => set,
        _ => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No curves loaded  (File → Open data folder…)");
            });
            return;
        }
    };

    let config = &state.config;
    let bounds = config.axis_bounds;
    let floor = value_floor(set, config);
    let composition = compose(set, config.z_scheme, config.reverse_order);

    let mut plot = Plot::new("exclusion_plot")
        .custom_x_axes(vec![
            AxisHints::new_x()
                .label("Mass (µeV)")
                .formatter(mass_axis_formatter),
            AxisHints::new_x()
                .label("Frequency (GHz)")
                .formatter(frequency_axis_formatter)
                .placement(VPlacement::Top),
        ])
        .y_axis_label("χ")
        .y_axis_formatter(mass_axis_formatter)
        .x_grid_spacer(log_axis_spacer)
        .y_grid_spacer(log_axis_spacer)
        .include_x(bounds.xmin.log10())
        .include_x(bounds.xmax.log10())
        .include_y(floor.log10())
        .include_y(bounds.ymax.log10())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if config.show_legend {
        plot = plot.legend(Legend::default().position(Corner::RightBottom));
    }

    plot.show(ui, |plot_ui| {
        for composed in &composition.layers {
            let layer = composed.layer;
            if config.fill_regions {
                // Zero-width stroke: invisible, but the legend takes its colour.
                for strip in fill_strips(&layer.region) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(strip.to_vec()))
                            .fill_color(layer.color)
                            .stroke(Stroke::new(0.0, layer.color))
                            .name(&layer.label),
                    );
                }
                plot_ui.line(Line::new(log_points(&layer.region)).color(layer.color).width(1.0));
            } else {
                plot_ui.line(
                    Line::new(log_points(&layer.region))
                        .color(layer.color)
                        .width(1.5)
                        .name(&layer.label),
                );
            }
        }
    });
}

fn log_points(region: &ClosedRegion) -> PlotPoints {
    region
        .points()
        .map(|(m, v)| [m.log10(), v.log10()])
        .collect()
}

/// Split a sorted region into trapezoids reaching from each sample segment up
/// to the ceiling, in log10 space. egui only fills convex polygons; each
/// trapezoid has two vertical sides and is convex.
pub fn fill_strips(region: &ClosedRegion) -> Vec<[[f64; 2]; 4]> {
    let Some(&ceiling) = region.values.first() else {
        return Vec::new();
    };
    let top = ceiling.log10();
    let samples: Vec<[f64; 2]> = region
        .samples()
        .map(|(m, v)| [m.log10(), v.log10()])
        .collect();

    samples
        .windows(2)
        .filter(|w| w[1][0] > w[0][0])
        .map(|w| [w[0], w[1], [w[1][0], top], [w[0][0], top]])
        .collect()
}

// ---------------------------------------------------------------------------
// Log axes
// ---------------------------------------------------------------------------

/// Grid marks at every decade and at 2..9 × each decade.
fn log_axis_spacer(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let mut marks = Vec::new();
    for decade in min.floor() as i32..=max.ceil() as i32 {
        marks.extend(
            (1..10)
                .map(|j| GridMark {
                    value: decade as f64 + (j as f64).log10(),
                    step_size: if j == 1 { 1.0 } else { 0.1 },
                })
                .filter(|gm| (min..=max).contains(&gm.value)),
        );
    }
    marks
}

/// Labels decades only, as `1e-6`.
fn mass_axis_formatter(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    if mark.step_size < 1.0 {
        return String::new();
    }
    format!("{:.0e}", 10f64.powf(mark.value))
}

/// The same decade marks expressed as frequency.
fn frequency_axis_formatter(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    if mark.step_size < 1.0 {
        return String::new();
    }
    format!("{:.1e}", mass_to_frequency(10f64.powf(mark.value)))
}
