//! Mass-energy ↔ frequency conversion via the Planck relation.
//!
//! Drives the secondary (GHz) axis only; the plotted data always stays in µeV.

/// Planck constant in eV·s.
pub const H_EV_S: f64 = 4.135667696e-15;

/// Planck constant in µeV·s.
pub const H_UEV_S: f64 = H_EV_S * 1e6;

/// Data files tabulate mass in eV; the plot axis is in µeV.
pub const EV_TO_UEV: f64 = 1e6;

/// µeV → GHz.
pub fn mass_to_frequency(mass_uev: f64) -> f64 {
    mass_uev / H_UEV_S * 1e-9
}

/// GHz → µeV. Exact inverse of [`mass_to_frequency`] up to rounding.
pub fn frequency_to_mass(frequency_ghz: f64) -> f64 {
    frequency_ghz * H_UEV_S * 1e9
}

pub fn masses_to_frequencies(masses_uev: &[f64]) -> Vec<f64> {
    masses_uev.iter().copied().map(mass_to_frequency).collect()
}

pub fn frequencies_to_masses(frequencies_ghz: &[f64]) -> Vec<f64> {
    frequencies_ghz.iter().copied().map(frequency_to_mass).collect()
}
