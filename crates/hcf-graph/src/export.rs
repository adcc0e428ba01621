//! GNU MathProg rendering of a network, for cross-checking the computed flow
//! with an external LP solver such as `glpsol`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use hcf_core::errors::{ErrorInfo, FlowError};
use hcf_core::VertexId;

use crate::ids::ensure_vertex;
use crate::network::FlowNetwork;

const MODEL: &str = r#"param n, integer, >= 2;
/* number of nodes */
set V, default {0..(n-1)};
/* set of nodes */
set E, within V cross V;
/* set of arcs */
param a{(i,j) in E}, > 0;
/* a[i,j] is capacity of arc (i,j) */
param s, symbolic, in V, default 0;
/* source node */
param t, symbolic, in V, != s, default (n-1);
/* sink node */
var x{(i,j) in E}, >= 0, <= a[i,j];
/* x[i,j] is elementary flow through arc (i,j) to be found */
var flow, >= 0;
/* total flow from s to t */
s.t. node{i in V}:
/* node[i] is conservation constraint for node i */
    sum{(j,i) in E} x[j,i] + (if i = s then flow)
    /* summary flow into node i through all ingoing arcs */
    = /* must be equal to */
    sum{(i,j) in E} x[i,j] + (if i = t then flow);
    /* summary flow from node i through all outgoing arcs */
maximize obj: flow;
/* objective is to maximize the total flow through the network */
solve;
printf "Maximum flow from node %s to node %s is %g\n\n", s, t, flow;
data;
"#;

/// Writes the model for a `source -> sink` flow on `network` to `writer`.
///
/// The model section is fixed; the data section lists `n`, the terminals when
/// they differ from the defaults `0` and `n - 1`, and every forward arc as
/// `tail head capacity`.
pub fn write_mathprog<W: Write>(
    network: &FlowNetwork,
    source: VertexId,
    sink: VertexId,
    writer: &mut W,
) -> Result<(), FlowError> {
    ensure_vertex(network, source)?;
    ensure_vertex(network, sink)?;
    if source == sink {
        return Err(FlowError::Config(
            ErrorInfo::new(
                "degenerate-terminals",
                "solver model requires distinct source and sink",
            )
            .with_context("vertex", source.as_raw()),
        ));
    }

    let num_vertices = network.num_vertices() as u64;
    writer.write_all(MODEL.as_bytes())?;
    writeln!(writer, "param n := {num_vertices};")?;
    if source.as_raw() != 0 {
        writeln!(writer, "param s := {};", source.as_raw())?;
    }
    if sink.as_raw() != num_vertices - 1 {
        writeln!(writer, "param t := {};", sink.as_raw())?;
    }
    writeln!(writer, "param : E :   a :=")?;
    for (_, edge) in network.forward_arcs() {
        writeln!(
            writer,
            "          {} {}   {}",
            edge.tail().as_raw(),
            edge.head().as_raw(),
            edge.capacity()
        )?;
    }
    writeln!(writer, ";")?;
    writeln!(writer, "end;")?;
    Ok(())
}

/// Renders the model into a string.
pub fn render_mathprog(
    network: &FlowNetwork,
    source: VertexId,
    sink: VertexId,
) -> Result<String, FlowError> {
    let mut buffer = Vec::new();
    write_mathprog(network, source, sink, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|err| FlowError::Serde(ErrorInfo::new("model-encoding", err.to_string())))
}

/// Writes the model to the file at `path`, replacing any existing file.
pub fn export_mathprog(
    network: &FlowNetwork,
    source: VertexId,
    sink: VertexId,
    path: &Path,
) -> Result<(), FlowError> {
    let file = File::create(path).map_err(|err| {
        FlowError::Export(
            ErrorInfo::new("create-model-file", err.to_string())
                .with_context("path", path.display()),
        )
    })?;
    let mut writer = BufWriter::new(file);
    write_mathprog(network, source, sink, &mut writer)?;
    writer.flush()?;
    Ok(())
}
