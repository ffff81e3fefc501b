use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Stem, log10 mass range in eV, log10 of the deepest exclusion value.
const CURVES: [(&str, (f64, f64), f64); 17] = [
    ("Review_ev_vs_chi_Arias calculations", (-15.0, -2.0), -9.0),
    ("LSW_ev_vs_chi_CMB", (-14.0, -9.0), -7.0),
    ("Review_ev_vs_chi_ALPS", (-6.0, -2.0), -7.5),
    ("ev_vs_chi_YMCE", (-9.0, -4.0), -8.0),
    ("Jaekel_ev_vs_chi_Coulomb", (-15.0, -7.0), -3.0),
    ("LSW_ev_vs_chi_Earth", (-15.0, -12.0), -6.0),
    ("LSW_ev_vs_chi_Jupiter", (-14.0, -11.0), -7.0),
    ("ADMX_ev_vs_chi_ADMX", (-5.6, -5.4), -15.0),
    ("LSW_ev_vs_chi_CAST", (-6.0, 0.0), -10.0),
    ("Review_ev_vs_chi_HB", (-3.0, 4.0), -14.0),
    ("LSW_ev_vs_chi_Solar", (-4.0, 3.0), -12.0),
    ("LSW_ev_vs_chi_LSW", (-6.0, -1.0), -7.5),
    ("Jaekel_ev_vs_chi_Rydberg", (-9.0, -5.0), -1.5),
    ("special/LSW_ev_vs_chi_aeu", (0.0, 7.0), -3.0),
    ("LSW_ev_vs_chi_Thermal HP DM", (-7.0, 3.0), -13.0),
    ("LSW_ev_vs_chi_Y(3s)", (8.0, 10.0), -1.0),
    ("LSW_ev_vs_chi_EW", (7.0, 10.5), -2.0),
];

const POINTS_PER_CURVE: usize = 80;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

/// A U-shaped bound in log-log space: deepest in the middle of the mass
/// range, rising towards the edges, with a little jitter.
fn exclusion_curve(
    (lo, hi): (f64, f64),
    depth: f64,
    rng: &mut SimpleRng,
) -> Vec<(f64, f64)> {
    let mid = 0.5 * (lo + hi);
    let half = 0.5 * (hi - lo);
    (0..POINTS_PER_CURVE)
        .map(|i| {
            let t = i as f64 / (POINTS_PER_CURVE - 1) as f64;
            let log_m = lo + t * (hi - lo);
            let rise = ((log_m - mid) / half).powi(2) * depth.abs().min(6.0);
            let jitter = 0.15 * (rng.next_f64() - 0.5);
            (10f64.powf(log_m), 10f64.powf(depth + rise + jitter))
        })
        .collect()
}

/// Tabulated curves are rarely sorted; swap a few neighbours.
fn shuffle_locally(points: &mut [(f64, f64)], rng: &mut SimpleRng) {
    for _ in 0..points.len() / 4 {
        let i = rng.below(points.len() - 1);
        points.swap(i, i + 1);
    }
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    let mut rng = SimpleRng::new(42);

    for (stem, range, depth) in CURVES {
        let path = out_dir.join(format!("{stem}.csv"));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let mut points = exclusion_curve(range, depth, &mut rng);
        shuffle_locally(&mut points, &mut rng);

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        for (mass_ev, value) in &points {
            writer.serialize((mass_ev, value))?;
        }
        writer.flush()?;
    }

    println!(
        "Wrote {} curves ({POINTS_PER_CURVE} points each) to {}",
        CURVES.len(),
        out_dir.display()
    );
    Ok(())
}
