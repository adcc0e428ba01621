use std::error::Error;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use hcf_core::errors::{ErrorInfo, FlowError};
use hcf_core::provenance::RunProvenance;
use hcf_core::rng::RngHandle;
use hcf_core::{Capacity, VertexId};
use hcf_graph::{
    build_hypercube, canonical_hash, check_flow, export_mathprog, max_flow, min_cut, ArcFlow,
    FlowNetwork, FlowOutcome,
};
use serde::Serialize;
use tracing::info;

#[derive(Args, Debug)]
pub struct FlowArgs {
    /// Hypercube dimension k; the network has 2^k vertices.
    #[arg(long)]
    pub size: u32,
    /// Seed for capacity assignment.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Source vertex (defaults to 0).
    #[arg(long)]
    pub source: Option<u64>,
    /// Sink vertex (defaults to 2^k - 1).
    #[arg(long)]
    pub sink: Option<u64>,
    /// Write a GNU MathProg model of the network to this path.
    #[arg(long)]
    pub glpk: Option<PathBuf>,
    /// Include the per-arc flow assignment in the report.
    #[arg(long)]
    pub print_flow: bool,
}

#[derive(Debug, Serialize)]
struct FlowReport {
    provenance: RunProvenance,
    dimension: u32,
    vertices: usize,
    edges: usize,
    source: u64,
    sink: u64,
    max_flow: Capacity,
    augmentations: u64,
    elapsed_micros: u64,
    min_cut_arcs: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arcs: Option<Vec<ArcFlow>>,
}

/// A solved and verified hypercube.
pub struct Solved {
    pub network: FlowNetwork,
    pub source: VertexId,
    pub sink: VertexId,
    pub outcome: FlowOutcome,
    pub elapsed: Duration,
}

/// Builds a hypercube from `rng`, runs the engine between the requested
/// terminals and cross-checks the result against the flow invariants.
pub fn solve(
    dimension: u32,
    rng: &mut RngHandle,
    source: Option<u64>,
    sink: Option<u64>,
) -> Result<Solved, FlowError> {
    let mut network = build_hypercube(dimension, rng)?;
    let source = VertexId::from_raw(source.unwrap_or(0));
    let sink = VertexId::from_raw(sink.unwrap_or(network.num_vertices() as u64 - 1));

    let started = Instant::now();
    let outcome = max_flow(&mut network, source, sink)?;
    let elapsed = started.elapsed();

    let checked = check_flow(&network, source, sink)?;
    if checked != outcome.value {
        return Err(FlowError::Invariant(
            ErrorInfo::new("value-mismatch", "net source outflow differs from reported flow")
                .with_context("reported", outcome.value)
                .with_context("checked", checked),
        ));
    }
    Ok(Solved {
        network,
        source,
        sink,
        outcome,
        elapsed,
    })
}

pub fn run(args: &FlowArgs) -> Result<(), Box<dyn Error>> {
    let report = build_report(args)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn build_report(args: &FlowArgs) -> Result<FlowReport, FlowError> {
    let mut rng = RngHandle::from_seed(args.seed);
    let solved = solve(args.size, &mut rng, args.source, args.sink)?;
    let cut = min_cut(&solved.network, solved.source)?;

    let model = match &args.glpk {
        Some(path) => {
            export_mathprog(&solved.network, solved.source, solved.sink, path)?;
            info!(path = %path.display(), "wrote solver model");
            Some(path.display().to_string())
        }
        None => None,
    };

    let provenance = RunProvenance::new(canonical_hash(&solved.network), args.seed)
        .with_tool("hcf-sim", env!("CARGO_PKG_VERSION"));
    Ok(FlowReport {
        provenance,
        dimension: args.size,
        vertices: solved.network.num_vertices(),
        edges: solved.network.num_edges(),
        source: solved.source.as_raw(),
        sink: solved.sink.as_raw(),
        max_flow: solved.outcome.value,
        augmentations: solved.outcome.augmentations,
        elapsed_micros: solved.elapsed.as_micros() as u64,
        min_cut_arcs: cut.arcs.len(),
        model,
        arcs: args.print_flow.then(|| solved.network.arc_flows()),
    })
}
