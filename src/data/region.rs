use crate::error::{ExclusionError, Result};

use super::model::{ClosedRegion, SamplePoint};

/// Ceiling used by the published plots.
pub const DEFAULT_CEILING: f64 = 10.0;

/// Close an exclusion boundary against `ceiling` so it can be area-filled.
///
/// With `sort` the samples are ordered by ascending mass first (stable, each
/// value stays with its mass). The result has two more vertices than the
/// input: the smallest and largest mass are repeated at the ceiling so the
/// polygon closes with vertical edges on a log-log axis.
pub fn build_region(points: &[SamplePoint], sort: bool, ceiling: f64) -> Result<ClosedRegion> {
    if points.is_empty() {
        return Err(ExclusionError::InvalidInput(
            "cannot build a region from an empty sample set".into(),
        ));
    }
    if let Some((i, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !is_plottable(p.mass) || !is_plottable(p.value))
    {
        return Err(ExclusionError::format(
            format!("sample {i}"),
            format!("point ({}, {}) must be positive and finite", p.mass, p.value),
        ));
    }

    let mut ordered = points.to_vec();
    if sort {
        ordered.sort_by(|a, b| a.mass.total_cmp(&b.mass));
    }

    let n = ordered.len();
    let mut masses = Vec::with_capacity(n + 2);
    let mut values = Vec::with_capacity(n + 2);

    masses.push(ordered[0].mass);
    values.push(ceiling);
    for p in &ordered {
        masses.push(p.mass);
        values.push(p.value);
    }
    masses.push(ordered[n - 1].mass);
    values.push(ceiling);

    Ok(ClosedRegion { masses, values })
}

/// Log-log axes only take strictly positive, finite coordinates.
fn is_plottable(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
