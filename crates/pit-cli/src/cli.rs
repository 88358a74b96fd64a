// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — Command Line
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pit_types::error::PitResult;
use pit_types::{preset, TokamakPitParams};

/// Tokamak pit parametric designer
#[derive(Parser, Debug)]
#[command(name = "pit-designer")]
#[command(about = "Validate tokamak pit parameter sets and export plan views")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List built-in presets and whether each validates
    Presets,
    /// Print the parameter document as JSON
    Show(Source),
    /// Print validation findings; exit status 1 if there are any
    Validate(Source),
    /// Print the derived plan layout as JSON
    Plan(Source),
    /// Write the plan view as SVG
    Svg {
        #[command(flatten)]
        source: Source,

        /// Output SVG path
        #[arg(long, short = 'o')]
        output: PathBuf,

        /// Canvas width and height in pixels
        #[arg(long, default_value_t = 800)]
        size: u32,

        /// Export even when validation reports findings
        #[arg(long)]
        force: bool,
    },
}

/// Where the parameter set comes from. Defaults to the `default` preset.
#[derive(Args, Debug, Clone)]
pub struct Source {
    /// Built-in preset name (default, compact, wide, deep)
    #[arg(long, conflicts_with = "file")]
    pub preset: Option<String>,

    /// JSON parameter document
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl Source {
    pub fn load(&self) -> PitResult<TokamakPitParams> {
        match (&self.file, &self.preset) {
            (Some(path), _) => TokamakPitParams::from_file(path),
            (None, Some(name)) => preset(name),
            (None, None) => preset("default"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_is_default_preset() {
        let cli = Cli::try_parse_from(["pit-designer", "validate"]).unwrap();
        let Command::Validate(source) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(source.load().unwrap(), pit_types::default_params());
    }

    #[test]
    fn test_preset_and_file_conflict() {
        let res = Cli::try_parse_from([
            "pit-designer",
            "show",
            "--preset",
            "wide",
            "--file",
            "pit.json",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_svg_args() {
        let cli = Cli::try_parse_from([
            "pit-designer",
            "svg",
            "--preset",
            "deep",
            "-o",
            "plan.svg",
            "--force",
        ])
        .unwrap();
        match cli.command {
            Command::Svg {
                source,
                output,
                size,
                force,
            } => {
                assert_eq!(source.preset.as_deref(), Some("deep"));
                assert_eq!(output, PathBuf::from("plan.svg"));
                assert_eq!(size, 800);
                assert!(force);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_preset_fails_to_load() {
        let source = Source {
            preset: Some("shallow".to_string()),
            file: None,
        };
        assert!(source.load().is_err());
    }
}
