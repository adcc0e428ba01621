mod common;

use std::fs;

use common::{seeded_cube, vertex};
use hcf_graph::{export_mathprog, render_mathprog};

#[test]
fn model_lists_every_forward_arc() {
    let network = seeded_cube(3, 6);
    let model = render_mathprog(&network, vertex(0), vertex(7)).unwrap();
    assert!(model.starts_with("param n, integer, >= 2;\n"));
    assert!(model.contains("maximize obj: flow;\n"));
    assert!(model.contains("param n := 8;\n"));
    assert!(!model.contains("param s :="));
    assert!(!model.contains("param t :="));
    assert!(model.ends_with(";\nend;\n"));

    let data = model.split("param : E :   a :=\n").nth(1).unwrap();
    let arcs: Vec<&str> = data.lines().take_while(|line| *line != ";").collect();
    assert_eq!(arcs.len(), network.num_edges());
    for (line, (_, edge)) in arcs.iter().zip(network.forward_arcs()) {
        let expected = format!(
            "          {} {}   {}",
            edge.tail().as_raw(),
            edge.head().as_raw(),
            edge.capacity()
        );
        assert_eq!(*line, expected);
    }
}

#[test]
fn non_default_terminals_are_written() {
    let network = seeded_cube(2, 6);
    let model = render_mathprog(&network, vertex(1), vertex(2)).unwrap();
    assert!(model.contains("param s := 1;\n"));
    assert!(model.contains("param t := 2;\n"));
}

#[test]
fn equal_terminals_are_rejected() {
    let network = seeded_cube(2, 6);
    let err = render_mathprog(&network, vertex(1), vertex(1)).unwrap_err();
    assert_eq!(err.code(), "degenerate-terminals");
}

#[test]
fn export_writes_the_rendered_model() {
    let network = seeded_cube(4, 13);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hypercube.mod");
    export_mathprog(&network, vertex(0), vertex(15), &path).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        render_mathprog(&network, vertex(0), vertex(15)).unwrap()
    );
}

#[test]
fn export_into_missing_directory_fails() {
    let network = seeded_cube(1, 13);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("model.mod");
    let err = export_mathprog(&network, vertex(0), vertex(1), &path).unwrap_err();
    assert_eq!(err.code(), "create-model-file");
}
