use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use hcf_core::errors::FlowError;
use hcf_core::rng::RngHandle;
use hcf_core::Capacity;
use serde::Serialize;
use tracing::info;

use super::flow::solve;
use crate::config::{substream_id, SweepConfig};

#[derive(Args, Debug, Default)]
pub struct SweepArgs {
    /// YAML sweep configuration; flags below override its fields.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Smallest dimension to solve.
    #[arg(long)]
    pub min_size: Option<u32>,
    /// Largest dimension to solve, inclusive.
    #[arg(long)]
    pub max_size: Option<u32>,
    /// Random builds per dimension.
    #[arg(long)]
    pub trials: Option<usize>,
    /// Master seed for per-trial substreams.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct SweepReport {
    config: SweepConfig,
    rows: Vec<SweepRow>,
}

#[derive(Debug, Serialize)]
struct SweepRow {
    dimension: u32,
    vertices: usize,
    edges: usize,
    mean_flow: f64,
    min_flow: Capacity,
    max_flow: Capacity,
    mean_augmentations: f64,
    mean_elapsed_micros: f64,
}

pub fn run(args: &SweepArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(args)?;
    let report = sweep(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn resolve_config(args: &SweepArgs) -> Result<SweepConfig, FlowError> {
    let mut config = match &args.config {
        Some(path) => SweepConfig::load(path)?,
        None => SweepConfig::default(),
    };
    if let Some(min) = args.min_size {
        config.min_dimension = min;
    }
    if let Some(max) = args.max_size {
        config.max_dimension = max;
    }
    if let Some(trials) = args.trials {
        config.trials = trials;
    }
    if let Some(seed) = args.seed {
        config.master_seed = seed;
    }
    config.validate()?;
    Ok(config)
}

fn sweep(config: &SweepConfig) -> Result<SweepReport, FlowError> {
    let mut rows = Vec::new();
    for dimension in config.min_dimension..=config.max_dimension {
        let mut flows = Vec::with_capacity(config.trials);
        let mut augmentations = 0u64;
        let mut elapsed_micros = 0u128;
        let mut shape = (0, 0);
        for trial in 0..config.trials {
            let mut rng =
                RngHandle::for_substream(config.master_seed, substream_id(dimension, trial));
            let solved = solve(dimension, &mut rng, None, None)?;
            shape = (solved.network.num_vertices(), solved.network.num_edges());
            flows.push(solved.outcome.value);
            augmentations += solved.outcome.augmentations;
            elapsed_micros += solved.elapsed.as_micros();
        }

        let trials = config.trials as f64;
        let row = SweepRow {
            dimension,
            vertices: shape.0,
            edges: shape.1,
            mean_flow: flows.iter().map(|&v| v as f64).sum::<f64>() / trials,
            min_flow: flows.iter().copied().min().unwrap_or_default(),
            max_flow: flows.iter().copied().max().unwrap_or_default(),
            mean_augmentations: augmentations as f64 / trials,
            mean_elapsed_micros: elapsed_micros as f64 / trials,
        };
        info!(
            dimension,
            mean_flow = row.mean_flow,
            mean_augmentations = row.mean_augmentations,
            "dimension solved"
        );
        rows.push(row);
    }
    Ok(SweepReport {
        config: config.clone(),
        rows,
    })
}
