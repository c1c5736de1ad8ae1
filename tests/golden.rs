//! Golden tests for graph analytics.
//!
//! These tests pin the exact outputs of each report on small hand-checked
//! graphs, including the placeholder metrics and traversal order.

use graph_analytics::{
    Node, Edge, Graph, GraphError,
    build_adjacency_lists, ancestor_descendant, top_down_aggregation,
    aggregate_by_type, overview_statistics,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn ids(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn build_diamond_graph() -> Graph {
    //     A
    //    / \
    //   B   C
    //    \ /
    //     D
    Graph::new(
        vec![
            Node::new("A", "input"),
            Node::new("B", "process"),
            Node::new("C", "process"),
            Node::new("D", "output"),
        ],
        vec![
            Edge::new("A", "B"),
            Edge::new("A", "C"),
            Edge::new("B", "D"),
            Edge::new("C", "D"),
        ],
    )
}

fn build_self_loop_graph() -> Graph {
    Graph::new(
        vec![Node::new("loop", "recursive"), Node::new("start", "input")],
        vec![Edge::new("start", "loop"), Edge::new("loop", "loop")],
    )
}

fn build_branching_graph() -> Graph {
    //         1
    //        /|\
    //       2 3 4
    //      / \
    //     5   6
    Graph::new(
        vec![
            Node::new("1", "root").with_value(12.0),
            Node::new("2", "mid").with_value(1.0),
            Node::new("3", "mid"),
            Node::new("4", "leaf").with_value(2.0),
            Node::new("5", "leaf"),
            Node::new("6", "leaf").with_value(0.5),
        ],
        vec![
            Edge::new("1", "2"),
            Edge::new("1", "3"),
            Edge::new("1", "4"),
            Edge::new("2", "5"),
            Edge::new("2", "6"),
        ],
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// OVERVIEW SCENARIOS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_diamond_overview() {
    let graph = build_diamond_graph();
    let stats = overview_statistics(&graph.nodes, &graph.edges).unwrap();

    assert_eq!(stats.node_count, 4);
    assert_eq!(stats.edge_count, 4);
    assert_eq!(stats.average_degree, 2.0);
    assert_eq!(stats.branching_factor, 1.0);
    assert_eq!(stats.max_depth, 1);
    assert_eq!(stats.node_types, ids(&["input", "output", "process"]));
    assert_eq!(stats.unique_node_types_count, 3);
    assert_eq!(stats.source_node_types, ids(&["input"]));
    assert_eq!(stats.target_node_types, ids(&["output"]));
    assert_eq!(stats.root_node_count, 1);
    assert_eq!(stats.leaf_node_count, 1);

    let nodes: Vec<(&str, usize)> = stats
        .type_aggregate
        .aggregate_nodes
        .iter()
        .map(|t| (t.node_type.as_str(), t.node_count))
        .collect();
    assert_eq!(nodes, vec![("input", 1), ("output", 1), ("process", 2)]);

    let edges: Vec<(&str, &str, usize, f64)> = stats
        .type_aggregate
        .aggregate_edges
        .iter()
        .map(|t| {
            (
                t.from_type.as_str(),
                t.to_type.as_str(),
                t.transition_count,
                t.transition_probability,
            )
        })
        .collect();
    assert_eq!(
        edges,
        vec![("input", "process", 2, 1.0), ("process", "output", 2, 1.0)]
    );
}

#[test]
fn test_self_loop_overview() {
    let graph = build_self_loop_graph();
    let stats = graph.overview().unwrap();

    assert!(stats.target_node_types.is_empty());
    assert_eq!(stats.source_node_types, ids(&["input"]));
    assert_eq!(stats.average_degree, 2.0);
}

#[test]
fn test_overview_embeds_type_aggregate() {
    let graph = build_branching_graph();
    let stats = graph.overview().unwrap();
    let agg = aggregate_by_type(&graph.nodes, &graph.edges).unwrap();

    assert_eq!(stats.type_aggregate, agg);
    assert_eq!(stats.unique_node_types_count, agg.aggregate_nodes.len());
    assert_eq!(stats.graph_fingerprint, graph.fingerprint().unwrap());
}

// ─────────────────────────────────────────────────────────────────────────────
// TRAVERSAL TESTS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_adjacency_on_self_loop() {
    let graph = build_self_loop_graph();
    let lists = build_adjacency_lists(&graph.edges);

    assert_eq!(lists.forward["start"], ids(&["loop"]));
    assert_eq!(lists.forward["loop"], ids(&["loop"]));
    assert_eq!(lists.reverse["loop"], ids(&["start", "loop"]));
    assert!(!lists.reverse.contains_key("start"));
}

#[test]
fn test_branching_reachability_order() {
    let graph = build_branching_graph();
    let sets = ancestor_descendant(&graph.nodes, &graph.edges).unwrap();

    // Stack holds [2, 3, 4]; 4 pops first, then 3, then 2 and its subtree [6, 5].
    assert_eq!(sets[0].descendants, ids(&["4", "3", "2", "6", "5"]));
    assert!(sets[0].ancestors.is_empty());
    assert_eq!(sets[4].ancestors, ids(&["2", "1"]));
    assert_eq!(sets[4].reachable_nodes, ids(&["2", "1"]));
    assert_eq!(sets[1].reachable_nodes, ids(&["1", "6", "5"]));
}

#[test]
fn test_reachability_determinism_100_runs() {
    let graph = build_branching_graph();
    let first = graph.reachability().unwrap();

    for i in 1..100 {
        assert_eq!(
            first,
            graph.reachability().unwrap(),
            "Reachability must be deterministic (run {} differs from run 0)",
            i
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PROPAGATION TESTS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_propagation_conservation() {
    let nodes = vec![
        Node::new("A", "t").with_value(10.0),
        Node::new("B", "t").with_value(2.0),
        Node::new("C", "t").with_value(3.0),
    ];
    let edges = vec![Edge::new("A", "B"), Edge::new("A", "C")];

    let result = top_down_aggregation(&nodes, &edges).unwrap();
    let values: Vec<(&str, f64)> = result
        .iter()
        .map(|n| (n.id.as_str(), n.aggregated_value))
        .collect();
    assert_eq!(values, vec![("A", 10.0), ("B", 7.0), ("C", 8.0)]);
}

#[test]
fn test_branching_propagation() {
    let graph = build_branching_graph();
    let result = graph.propagate().unwrap();

    // 1 splits 12 three ways; 2 = 1 + 4 then splits 5 two ways.
    let values: Vec<f64> = result.iter().map(|n| n.aggregated_value).collect();
    assert_eq!(values, vec![12.0, 5.0, 4.0, 6.0, 2.5, 3.0]);
    assert_eq!(result[5].contributing_nodes, ids(&["6", "2", "1"]));
    assert_eq!(result[0].contributing_nodes, ids(&["1"]));
}

// ─────────────────────────────────────────────────────────────────────────────
// ERROR TAXONOMY
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_dangling_reference_surfaces_everywhere() {
    let nodes = vec![Node::new("a", "t")];
    let edges = vec![Edge::new("a", "missing")];

    assert!(matches!(
        ancestor_descendant(&nodes, &edges),
        Err(GraphError::DanglingReference { .. })
    ));
    assert!(matches!(
        top_down_aggregation(&nodes, &edges),
        Err(GraphError::DanglingReference { .. })
    ));
    assert!(matches!(
        overview_statistics(&nodes, &edges),
        Err(GraphError::DanglingReference { .. })
    ));

    // The adjacency builder works on edges alone.
    let lists = build_adjacency_lists(&edges);
    assert_eq!(lists.forward["a"], ids(&["missing"]));
}

#[test]
fn test_duplicate_ids_rejected_eagerly() {
    let nodes = vec![Node::new("a", "t"), Node::new("a", "u")];

    assert!(matches!(
        aggregate_by_type(&nodes, &[]),
        Err(GraphError::DuplicateNodeId(id)) if id == "a"
    ));
    assert!(matches!(
        top_down_aggregation(&nodes, &[]),
        Err(GraphError::DuplicateNodeId(_))
    ));
}

#[test]
fn test_cycle_is_not_a_dag() {
    let graph = build_self_loop_graph();
    match graph.propagate() {
        Err(GraphError::NotADag { unresolved }) => assert_eq!(unresolved, ids(&["loop"])),
        other => panic!("expected NotADag, got {:?}", other),
    }

    // Reachability still terminates on the same graph.
    let sets = graph.reachability().unwrap();
    assert_eq!(sets[0].ancestors, ids(&["start"]));
    assert!(sets[0].descendants.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// SERIALIZATION TESTS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_graph_document_round_trip() {
    let graph = build_branching_graph();
    let json = serde_json::to_string(&graph).unwrap();
    let decoded = Graph::from_json_str(&json).unwrap();

    assert_eq!(decoded, graph);
    assert_eq!(decoded.fingerprint().unwrap(), graph.fingerprint().unwrap());
}

#[test]
fn test_weight_is_carried_but_ignored() {
    let mut graph = build_branching_graph();
    let before = graph.propagate().unwrap();

    for node in &mut graph.nodes {
        node.weight = Some(100.0);
    }
    assert_eq!(graph.propagate().unwrap(), before);
    assert_eq!(graph.nodes[0].weight, Some(100.0));
}
