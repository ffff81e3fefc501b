use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use eframe::egui::Color32;

use crate::color::resolve_colors;

// ---------------------------------------------------------------------------
// Published curves, back to front
// ---------------------------------------------------------------------------

/// One published curve: file stem under the data directory and its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSpec {
    pub stem: &'static str,
    pub color: &'static str,
}

const fn curve(stem: &'static str, color: &'static str) -> CurveSpec {
    CurveSpec { stem, color }
}

/// Haloscopes first, then everything else.
pub const CURVES: [CurveSpec; 17] = [
    curve("Review_ev_vs_chi_Arias calculations", "lightgray"),
    curve("LSW_ev_vs_chi_CMB", "darkviolet"),
    curve("Review_ev_vs_chi_ALPS", "yellow"),
    curve("ev_vs_chi_YMCE", "lightskyblue"),
    curve("Jaekel_ev_vs_chi_Coulomb", "lightgreen"),
    curve("LSW_ev_vs_chi_Earth", "violet"),
    curve("LSW_ev_vs_chi_Jupiter", "brown"),
    curve("ADMX_ev_vs_chi_ADMX", "darksalmon"),
    curve("LSW_ev_vs_chi_CAST", "pink"),
    curve("Review_ev_vs_chi_HB", "olive"),
    curve("LSW_ev_vs_chi_Solar", "goldenrod"),
    curve("LSW_ev_vs_chi_LSW", "midnightblue"),
    curve("Jaekel_ev_vs_chi_Rydberg", "teal"),
    curve("special/LSW_ev_vs_chi_aeu", "tab:grey"),
    curve("LSW_ev_vs_chi_Thermal HP DM", "blue"),
    curve("LSW_ev_vs_chi_Y(3s)", "darkslategrey"),
    curve("LSW_ev_vs_chi_EW", "fuchsia"),
];

/// Curves kept in the cropped (low-mass) plot.
pub const CROPPED: [usize; 12] = [0, 1, 2, 3, 4, 7, 8, 9, 10, 11, 12, 14];

const LABEL_MARKER: &str = "chi_";

/// The catalog in draw order.
pub fn curve_order(full_range: bool) -> Vec<CurveSpec> {
    if full_range {
        CURVES.to_vec()
    } else {
        CROPPED.iter().map(|&i| CURVES[i]).collect()
    }
}

/// Display label for a file stem: the text after the last `chi_` marker.
pub fn label_for_stem(stem: &str) -> String {
    let name = match stem.rfind(LABEL_MARKER) {
        Some(pos) => &stem[pos + LABEL_MARKER.len()..],
        None => stem.rsplit('/').next().unwrap_or(stem),
    };
    if name.contains("Y(3s)") {
        "γ(3s)".to_string()
    } else {
        name.to_string()
    }
}

// ---------------------------------------------------------------------------
// Discovery: parallel path / colour lists plus the label mapping
// ---------------------------------------------------------------------------

/// What the loader consumes: equally long, ordered `paths` and `colors`, and
/// an explicit `path → label` mapping.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub paths: Vec<PathBuf>,
    pub colors: Vec<Color32>,
    pub labels: BTreeMap<PathBuf, String>,
}

impl Discovery {
    /// Label for `path`, falling back to its file stem.
    pub fn label(&self, path: &Path) -> String {
        self.labels.get(path).cloned().unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .map(label_for_stem)
                .unwrap_or_default()
        })
    }
}

/// Resolve the catalog against `data_dir`. Files are not opened here.
pub fn discover(data_dir: &Path, full_range: bool) -> Discovery {
    let specs = curve_order(full_range);
    let color_names: Vec<&str> = specs.iter().map(|s| s.color).collect();

    let mut discovery = Discovery {
        colors: resolve_colors(&color_names),
        ..Default::default()
    };
    for spec in &specs {
        let path = data_dir.join(format!("{}.csv", spec.stem));
        discovery.labels.insert(path.clone(), label_for_stem(spec.stem));
        discovery.paths.push(path);
    }
    log::debug!(
        "Catalog ({} curves, full_range={full_range}) under {}",
        discovery.paths.len(),
        data_dir.display()
    );
    discovery
}
