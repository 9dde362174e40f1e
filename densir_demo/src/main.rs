// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a violin plot of grouped samples to an SVG file.
//!
//! Input is a JSON array of `{ "name": "A", "value": 10.75 }` objects. Without `--input`, a
//! bundled dataset is used.

mod chart;
mod error;
mod logger;
mod svg;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use densir_shape::{
    Bump, CatmullRom, Linear, MonotoneX, OutlineSide, Sample, Thresholds, ViolinPlotSpec,
};

use crate::chart::{ChartStyle, violin_scene};
use crate::error::DemoError;

const BUNDLED_SAMPLES: &str = include_str!("../data/samples.json");

/// Violin plot demo for densir.
#[derive(Parser, Debug)]
#[command(name = "densir_demo", version, about = "Render a violin plot to SVG")]
struct Cli {
    /// JSON sample file (default: bundled dataset)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// SVG file to write
    #[arg(short, long, default_value = "violin.svg")]
    output: PathBuf,

    /// Plot area width in pixels
    #[arg(long, default_value = "600")]
    width: f64,

    /// Plot area height in pixels
    #[arg(long, default_value = "400")]
    height: f64,

    /// Number of bins (exact for `count`, approximate for `nice`)
    #[arg(long, default_value = "14")]
    thresholds: usize,

    /// Binning rule
    #[arg(long, default_value = "nice")]
    rule: Rule,

    /// Outline interpolation
    #[arg(long, default_value = "bump")]
    curve: Curve,

    /// Outline sides to draw
    #[arg(long, default_value = "both")]
    side: Side,

    /// Band padding fraction in [0, 1)
    #[arg(long, default_value = "0.05")]
    padding: f64,

    /// Render points per outline segment
    #[arg(long, default_value = "8")]
    samples_per_segment: usize,

    /// Extend the value axis to nice round ticks
    #[arg(long)]
    nice: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Rule {
    Count,
    Nice,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Curve {
    Bump,
    Linear,
    CatmullRom,
    Monotone,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Side {
    Both,
    Start,
    End,
}

impl Cli {
    fn plot_spec(&self) -> ViolinPlotSpec {
        let thresholds = match self.rule {
            Rule::Count => Thresholds::Count(self.thresholds),
            Rule::Nice => Thresholds::Nice(self.thresholds),
        };
        let side = match self.side {
            Side::Both => OutlineSide::Both,
            Side::Start => OutlineSide::Start,
            Side::End => OutlineSide::End,
        };
        let spec = ViolinPlotSpec::new(self.width, self.height)
            .with_thresholds(thresholds)
            .with_padding(self.padding)
            .with_side(side)
            .with_samples_per_segment(self.samples_per_segment)
            .with_nice(self.nice.then_some(ChartStyle::default().tick_count));
        match self.curve {
            Curve::Bump => spec.with_curve(Bump),
            Curve::Linear => spec.with_curve(Linear),
            Curve::CatmullRom => spec.with_curve(CatmullRom),
            Curve::Monotone => spec.with_curve(MonotoneX),
        }
    }
}

fn load_samples(input: Option<&Path>) -> Result<Vec<Sample>, DemoError> {
    let samples: Vec<Sample> = match input {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| DemoError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&text)?
        }
        None => serde_json::from_str(BUNDLED_SAMPLES)?,
    };
    log::info!(
        "loaded {} samples from {}",
        samples.len(),
        input.map_or_else(|| "the bundled dataset".to_string(), |p| p.display().to_string())
    );
    Ok(samples)
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let samples = load_samples(cli.input.as_deref())?;
    let plot = cli.plot_spec().build(&samples)?;
    for violin in plot.violins() {
        log::debug!(
            "group {}: {} bins, {} outline points",
            violin.group,
            violin.bins.len(),
            violin.outline.points().len()
        );
    }

    let scene = violin_scene(&plot, (cli.width, cli.height), &ChartStyle::default());
    fs::write(&cli.output, scene.to_svg_string()).map_err(|source| DemoError::Write {
        path: cli.output.clone(),
        source,
    })?;
    log::info!(
        "wrote {} violins to {}",
        plot.violins().len(),
        cli.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = logger::init(cli.verbose)
        .map_err(DemoError::from)
        .and_then(|level| {
            log::debug!("log level {level}");
            run(&cli)
        });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("densir_demo: {err}");
            ExitCode::FAILURE
        }
    }
}
