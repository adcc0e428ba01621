#![deny(missing_docs)]

//! Hypercube flow networks and the Edmonds-Karp engine over the `hcf-core`
//! residual model.
//!
//! The usual sequence is [`build_hypercube`], then [`max_flow`], optionally
//! followed by [`check_flow`], [`min_cut`] or [`export_mathprog`] on the
//! finished network.

mod augment;
mod cut;
mod export;
mod generators;
mod hash;
mod ids;
mod invariants;
mod max_flow;
mod network;

pub use augment::{find_augmenting_path, AugmentingPath};
pub use cut::{min_cut, MinCut};
pub use export::{export_mathprog, render_mathprog, write_mathprog};
pub use generators::{build_hypercube, capacity_exponent_limit, hypercube_order, MAX_DIMENSION};
pub use hash::canonical_hash;
pub use invariants::check_flow;
pub use max_flow::{max_flow, FlowOutcome};
pub use network::{ArcFlow, FlowNetwork};
