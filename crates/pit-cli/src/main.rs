// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — pit-designer binary
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Command-line front end: presets, validation, JSON and SVG output.
//!
//! Logs go to stderr (`RUST_LOG`, default `info`); stdout carries only the
//! requested document.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use pit_geometry::derive_plan;
use pit_render::{export_plan_svg, SvgStyle};
use pit_types::error::PitResult;
use pit_types::presets;
use pit_validate::check;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> PitResult<ExitCode> {
    match cli.command {
        Command::Presets => {
            for (name, params) in presets() {
                let findings = check(&params);
                if findings.is_empty() {
                    println!("{name}\tok");
                } else {
                    println!("{name}\t{} finding(s)", findings.len());
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Show(source) => {
            println!("{}", source.load()?.to_json_pretty()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate(source) => {
            let findings = check(&source.load()?);
            for finding in &findings {
                println!("{finding}");
            }
            if findings.is_empty() {
                tracing::info!("no issues detected");
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Plan(source) => {
            let plan = derive_plan(&source.load()?)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Svg {
            source,
            output,
            size,
            force,
        } => {
            let params = source.load()?;
            let findings = check(&params);
            if !findings.is_empty() {
                for finding in &findings {
                    tracing::warn!(category = ?finding.category, "{finding}");
                }
                if !force {
                    tracing::error!("refusing to export an invalid pit; pass --force to override");
                    return Ok(ExitCode::FAILURE);
                }
                tracing::warn!("exporting invalid pit (--force)");
            }

            let style = SvgStyle {
                size_px: size,
                ..SvgStyle::default()
            };
            std::fs::write(&output, export_plan_svg(&params, &style)?)?;
            tracing::info!(path = %output.display(), "wrote plan svg");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(2)
        }
    }
}
