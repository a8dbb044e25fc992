// Command-line arguments
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "eu-energy-dashboard", version, about = "EU energy consumption dashboard data")]
pub struct Cli {
    /// Directory holding dataset.toml and widgets.toml; relative sheet
    /// paths in dataset.toml are resolved against it
    #[arg(long, global = true, default_value = "config")]
    pub config_dir: PathBuf,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List countries for the country selector
    Countries,

    /// List measures, energy types and the year range
    Measures,

    /// Yearly series of selected measures for one country
    Series {
        #[arg(long)]
        country: Option<String>,

        /// Last year of the window (the window starts in 2000)
        #[arg(long)]
        year: Option<i32>,

        /// Measure to plot, repeatable
        #[arg(long = "measure", required = true)]
        measures: Vec<String>,

        /// Shorten legend labels to the text before "Consumption"
        #[arg(long)]
        strip_consumption: bool,
    },

    /// Static attributes and derived consumption shares of one country
    Profile {
        #[arg(long)]
        country: Option<String>,
    },

    /// Every configured chart for one selection
    Dashboard {
        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        year: Option<i32>,

        /// Energy type for the per-type chart, repeatable
        #[arg(long = "energy")]
        energy_types: Vec<String>,

        /// Keep countries the stacked bar chart normally excludes
        #[arg(long)]
        no_exclusions: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_series_command() {
        let cli = Cli::parse_from([
            "eu-energy-dashboard",
            "series",
            "--country",
            "Portugal",
            "--year",
            "2007",
            "--measure",
            "Wind",
            "--measure",
            "Wind",
        ]);

        assert_eq!(cli.config_dir, PathBuf::from("config"));
        match cli.command {
            Command::Series {
                country,
                year,
                measures,
                strip_consumption,
            } => {
                assert_eq!(country.as_deref(), Some("Portugal"));
                assert_eq!(year, Some(2007));
                assert_eq!(measures, vec!["Wind", "Wind"]);
                assert!(!strip_consumption);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_series_requires_a_measure() {
        assert!(Cli::try_parse_from(["eu-energy-dashboard", "series"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "eu-energy-dashboard",
            "dashboard",
            "--pretty",
            "--config-dir",
            "/etc/eu",
        ]);

        assert!(cli.pretty);
        assert_eq!(cli.config_dir, PathBuf::from("/etc/eu"));
        assert!(matches!(
            cli.command,
            Command::Dashboard {
                ref energy_types,
                no_exclusions: false,
                ..
            } if energy_types.is_empty()
        ));
    }
}
