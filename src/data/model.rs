use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// SamplePoint – one row of an experiment's data file
// ---------------------------------------------------------------------------

/// A tabulated boundary sample: mass in µeV, exclusion value in the
/// experiment's native unit (χ for the hidden-photon curves).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub mass: f64,
    pub value: f64,
}

impl From<(f64, f64)> for SamplePoint {
    fn from((mass, value): (f64, f64)) -> Self {
        SamplePoint { mass, value }
    }
}

// ---------------------------------------------------------------------------
// ClosedRegion – polygon ready for area fill
// ---------------------------------------------------------------------------

/// Exclusion boundary closed against the ceiling at both ends.
///
/// `masses[0] == masses[1]` and `masses[n-1] == masses[n-2]`; the first and
/// last values are the ceiling. Everything between the curve and the ceiling
/// is the excluded area.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedRegion {
    pub masses: Vec<f64>,
    pub values: Vec<f64>,
}

impl ClosedRegion {
    /// Number of polygon vertices, synthetic endpoints included.
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Vertices as `(mass, value)` pairs in polygon order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.masses.iter().copied().zip(self.values.iter().copied())
    }

    /// The measured samples only, without the two ceiling vertices.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let inner = self.len().saturating_sub(2);
        self.points().skip(1).take(inner)
    }

    /// `(min, max)` mass over all vertices.
    pub fn mass_range(&self) -> (f64, f64) {
        self.masses
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &m| {
                (lo.min(m), hi.max(m))
            })
    }

    /// Smallest strictly positive value, if any. Used for log-axis bounds.
    pub fn min_positive_value(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| *v > 0.0 && v.is_finite())
            .reduce(f64::min)
    }
}

// ---------------------------------------------------------------------------
// Layer / PlotLayerSet – what the composer draws
// ---------------------------------------------------------------------------

/// One experiment on the plot.
#[derive(Debug, Clone)]
pub struct Layer {
    pub region: ClosedRegion,
    pub label: String,
    pub color: Color32,
}

/// Layers in back-to-front order plus the z-order base offset.
#[derive(Debug, Clone)]
pub struct PlotLayerSet {
    pub layers: Vec<Layer>,
    pub z_base: i32,
}

impl PlotLayerSet {
    pub fn new(layers: Vec<Layer>, z_base: i32) -> Self {
        PlotLayerSet { layers, z_base }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Smallest positive value over every layer.
    pub fn min_positive_value(&self) -> Option<f64> {
        self.layers
            .iter()
            .filter_map(|l| l.region.min_positive_value())
            .reduce(f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> ClosedRegion {
        ClosedRegion {
            masses: vec![1.0, 1.0, 2.0, 3.0, 3.0],
            values: vec![10.0, 5.0, 8.0, 2.0, 10.0],
        }
    }

    #[test]
    fn samples_skip_ceiling_vertices() {
        let r = region();
        let inner: Vec<_> = r.samples().collect();
        assert_eq!(inner, vec![(1.0, 5.0), (2.0, 8.0), (3.0, 2.0)]);
        assert_eq!(r.points().count(), 5);
    }

    #[test]
    fn ranges() {
        let r = region();
        assert_eq!(r.mass_range(), (1.0, 3.0));
        assert_eq!(r.min_positive_value(), Some(2.0));
    }

    #[test]
    fn layer_set_min_value_spans_layers() {
        let mut other = region();
        other.values[2] = 0.25;
        let set = PlotLayerSet::new(
            vec![
                Layer { region: region(), label: "a".into(), color: Color32::RED },
                Layer { region: other, label: "b".into(), color: Color32::BLUE },
            ],
            0,
        );
        assert_eq!(set.min_positive_value(), Some(0.25));
        assert_eq!(set.len(), 2);
    }
}
