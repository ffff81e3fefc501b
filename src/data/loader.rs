use std::fs::File;
use std::path::Path;

use crate::config::PlotConfig;
use crate::error::{ExclusionError, Result};
use crate::units::EV_TO_UEV;

use super::catalog::Discovery;
use super::model::{ClosedRegion, Layer, PlotLayerSet, SamplePoint};
use super::region::build_region;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every discovered curve and close it against the configured ceiling.
///
/// Fails on the first unreadable or malformed file; no partial layer set is
/// returned.
pub fn load_layer_set(discovery: &Discovery, config: &PlotConfig) -> Result<PlotLayerSet> {
    if discovery.paths.len() != discovery.colors.len() {
        return Err(ExclusionError::InvalidInput(format!(
            "{} data files but {} colours",
            discovery.paths.len(),
            discovery.colors.len()
        )));
    }

    let layers = discovery
        .paths
        .iter()
        .zip(&discovery.colors)
        .map(|(path, &color)| {
            Ok(Layer {
                region: load_region(path, config.ceiling)?,
                label: discovery.label(path),
                color,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PlotLayerSet::new(layers, config.z_base))
}

/// Load one experiment's samples and build its closed region.
pub fn load_region(path: &Path, ceiling: f64) -> Result<ClosedRegion> {
    let samples = load_samples(path)?;
    let region = build_region(&samples, true, ceiling).map_err(|e| match e {
        ExclusionError::InvalidInput(msg) => {
            ExclusionError::InvalidInput(format!("{}: {msg}", path.display()))
        }
        other => other,
    })?;
    log::info!(
        "Loaded {} ({} points)",
        path.file_stem().and_then(|s| s.to_str()).unwrap_or("?"),
        samples.len()
    );
    Ok(region)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// CSV layout: no header, column 0 mass in eV, column 1 exclusion value.
/// Masses are returned in µeV. Extra columns are ignored, blank lines skipped.
pub fn load_samples(path: &Path) -> Result<Vec<SamplePoint>> {
    let file = File::open(path).map_err(|source| ExclusionError::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;
    read_samples(file, &path.display().to_string())
}

/// Parse samples from any reader; `origin` prefixes error locations.
pub fn read_samples<R: std::io::Read>(reader: R, origin: &str) -> Result<Vec<SamplePoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let line = row_no + 1;
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line() as usize).unwrap_or(line);
            ExclusionError::format(format!("{origin}:{line}"), e.to_string())
        })?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(line);
        let location = || format!("{origin}:{line}");

        if record.len() < 2 {
            return Err(ExclusionError::format(
                location(),
                format!("expected 2 columns, found {}", record.len()),
            ));
        }
        let mass_ev = parse_field(record.get(0).unwrap_or(""), "mass", &location)?;
        let value = parse_field(record.get(1).unwrap_or(""), "value", &location)?;

        samples.push(SamplePoint::from((mass_ev * EV_TO_UEV, value)));
    }
    Ok(samples)
}

fn parse_field(tok: &str, col: &str, location: &impl Fn() -> String) -> Result<f64> {
    let v = tok
        .parse::<f64>()
        .map_err(|_| ExclusionError::format(location(), format!("{col} '{tok}' is not a number")))?;
    if !v.is_finite() {
        return Err(ExclusionError::format(location(), format!("{col} '{tok}' is not finite")));
    }
    if v <= 0.0 {
        return Err(ExclusionError::format(location(), format!("{col} '{tok}' must be positive")));
    }
    Ok(v)
}
