use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::config::PlotConfig;

#[derive(Debug, Parser)]
#[command(
    name = "exclusion-plot",
    version,
    about = "Plot published exclusion regions on a mass / frequency dual axis"
)]
pub struct Cli {
    /// JSON plot configuration; flags below override it.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Directory holding the per-experiment CSV files.
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    /// Directory figures are written to.
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    #[arg(long)]
    pub no_legend: bool,

    /// Do not write PNG/SVG files.
    #[arg(long)]
    pub no_save: bool,

    /// Restrict the mass axis to a frequency window, in GHz.
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    pub ghz: Option<Vec<f64>>,

    /// Outline regions instead of filling them.
    #[arg(long)]
    pub lines: bool,

    /// Only the low-mass subset of the catalog.
    #[arg(long)]
    pub cropped: bool,

    /// Write figures and exit without opening the viewer.
    #[arg(long)]
    pub headless: bool,

    /// Preview a single data file (fill, outline, markers) and exit.
    #[arg(long, value_name = "CSV", value_hint = ValueHint::FilePath)]
    pub inspect: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut PlotConfig) {
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if self.no_legend {
            config.show_legend = false;
        }
        if self.no_save {
            config.persist_to_disk = false;
        }
        if self.lines {
            config.fill_regions = false;
        }
        if self.cropped {
            config.full_range = false;
        }
        if let Some([lo, hi]) = self.ghz.as_deref() {
            config.set_frequency_window(*lo, *hi);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "exclusion-plot",
            "--data-dir",
            "/tmp/curves",
            "--no-legend",
            "--lines",
            "--cropped",
            "--headless",
        ])
        .unwrap();
        let mut config = PlotConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.data_dir, PathBuf::from("/tmp/curves"));
        assert!(!config.show_legend);
        assert!(!config.fill_regions);
        assert!(!config.full_range);
        assert!(config.persist_to_disk);
        assert!(cli.headless);
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let cli = Cli::try_parse_from(["exclusion-plot"]).unwrap();
        let mut config = PlotConfig::default();
        cli.apply(&mut config);
        assert_eq!(config, PlotConfig::default());
        assert!(cli.inspect.is_none());
    }

    #[test]
    fn inspect_takes_a_path() {
        let cli = Cli::try_parse_from(["exclusion-plot", "--inspect", "data/ev_vs_chi_YMCE.csv"])
            .unwrap();
        assert_eq!(cli.inspect, Some(PathBuf::from("data/ev_vs_chi_YMCE.csv")));
    }

    #[test]
    fn frequency_window_replaces_mass_bounds() {
        let cli = Cli::try_parse_from(["exclusion-plot", "--ghz", "1", "10"]).unwrap();
        let mut config = PlotConfig::default();
        cli.apply(&mut config);
        assert!((config.axis_bounds.xmin - 4.135667696).abs() < 1e-9);
        assert!(config.axis_bounds.xmax > config.axis_bounds.xmin);
        assert!(Cli::try_parse_from(["exclusion-plot", "--ghz", "1"]).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["exclusion-plot", "--colour"]).is_err());
    }
}
