//! Property tests for graph construction, A* and reachability.

use std::collections::BTreeSet;
use std::ops::Range;

use pn_core::{NodeIdx, Tolerances, nearly_equal};
use pn_graph::{
    Graph, PathOutcome, build_graph, find_path, find_unreachable_nodes,
    find_unreachable_nodes_par,
};
use pn_network::{RawConnection, RawNode};
use proptest::prelude::*;
use proptest::sample::Index;

#[derive(Debug, Clone)]
struct Network {
    nodes: Vec<RawNode>,
    connections: Vec<RawConnection>,
}

fn node_name(i: usize) -> String {
    if i == 0 {
        "boiler".to_string()
    } else {
        format!("n{i}")
    }
}

/// Up to `max_nodes` nodes on an integer grid, node 0 being the boiler, with
/// random pipes between them (self-loops and parallel pipes included).
fn network(max_nodes: usize, loss: Range<f64>) -> impl Strategy<Value = Network> {
    (2..=max_nodes)
        .prop_flat_map(move |n| {
            let coords = prop::collection::vec(prop::array::uniform3(-5_i32..=5), n);
            let pipes = prop::collection::vec((0..n, 0..n, 10.0_f64..20.0, loss.clone()), 0..=2 * n);
            (coords, pipes)
        })
        .prop_map(|(coords, pipes)| Network {
            nodes: coords
                .iter()
                .enumerate()
                .map(|(i, c)| RawNode::new(node_name(i), c[0] as f64, c[1] as f64, c[2] as f64))
                .collect(),
            connections: pipes
                .iter()
                .map(|&(a, b, d, loss)| RawConnection::new(node_name(a), node_name(b), d, loss))
                .collect(),
        })
}

/// Cheapest simple path cost by trying every simple path.
fn exhaustive_cost(graph: &Graph, start: NodeIdx, goal: NodeIdx) -> Option<f64> {
    fn walk(
        graph: &Graph,
        current: NodeIdx,
        goal: NodeIdx,
        visited: &mut [bool],
        cost: f64,
        best: &mut Option<f64>,
    ) {
        if current == goal {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for edge in graph.neighbors(current) {
            let n = edge.to.index();
            if visited[n] {
                continue;
            }
            visited[n] = true;
            walk(graph, edge.to, goal, visited, cost + edge.weight, best);
            visited[n] = false;
        }
    }

    let mut visited = vec![false; graph.len()];
    visited[start.index()] = true;
    let mut best = None;
    walk(graph, start, goal, &mut visited, 0.0, &mut best);
    best
}

/// Ids connected to `goal` by any chain of edges.
fn connected_to(graph: &Graph, goal: NodeIdx) -> BTreeSet<String> {
    let mut seen = vec![false; graph.len()];
    let mut stack = vec![goal];
    seen[goal.index()] = true;
    while let Some(idx) = stack.pop() {
        for edge in graph.neighbors(idx) {
            if !seen[edge.to.index()] {
                seen[edge.to.index()] = true;
                stack.push(edge.to);
            }
        }
    }
    graph
        .nodes()
        .iter()
        .filter(|n| seen[n.idx.index()])
        .map(|n| n.id().to_string())
        .collect()
}

proptest! {
    #[test]
    fn edges_are_symmetric(net in network(10, 0.0..2.0)) {
        let graph = build_graph(&net.nodes, &net.connections).unwrap();
        for node in graph.nodes() {
            for edge in node.edges() {
                let other = graph.node(edge.to).unwrap();
                prop_assert!(other
                    .edges()
                    .iter()
                    .any(|back| back.to == node.idx && back.weight == edge.weight));
            }
        }
        prop_assert_eq!(graph.edge_count(), net.connections.len());
    }

    #[test]
    fn optimal_when_heuristic_is_a_lower_bound(
        net in network(7, 0.5..2.0),
        start in any::<Index>(),
    ) {
        // Pipes of at least 10 cm with loss >= 0.5 cost more than 3.9 per
        // meter, so the distance to the boiler never overestimates.
        let graph = build_graph(&net.nodes, &net.connections).unwrap();
        let start = &graph.nodes()[start.index(graph.len())];
        let goal = graph.anchor().idx;

        let outcome = find_path(&graph, start.id(), "boiler").unwrap();
        match exhaustive_cost(&graph, start.idx, goal) {
            None => prop_assert_eq!(outcome, PathOutcome::NoPath),
            Some(best) => {
                let path = outcome.into_path().unwrap();
                let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
                prop_assert!(nearly_equal(path.cost, best, tol), "{} vs {}", path.cost, best);
                prop_assert_eq!(path.nodes.first().map(String::as_str), Some(start.id()));
                prop_assert_eq!(path.nodes.last().map(String::as_str), Some("boiler"));
                for pair in path.nodes.windows(2) {
                    prop_assert!(graph.edge_weight(&pair[0], &pair[1]).is_some());
                }
            }
        }
    }

    #[test]
    fn search_is_deterministic(
        net in network(10, 0.0..2.0),
        start in any::<Index>(),
        goal in any::<Index>(),
    ) {
        let first = build_graph(&net.nodes, &net.connections).unwrap();
        let second = build_graph(&net.nodes, &net.connections).unwrap();
        let start = net.nodes[start.index(net.nodes.len())].pipe_id.clone();
        let goal = net.nodes[goal.index(net.nodes.len())].pipe_id.clone();

        let a = find_path(&first, &start, &goal).unwrap();
        let b = find_path(&second, &start, &goal).unwrap();
        let c = find_path(&first, &start, &goal).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &c);
    }

    #[test]
    fn unreachable_is_complement_of_found_paths(
        net in network(10, 0.0..2.0),
        goal in any::<Index>(),
    ) {
        let graph = build_graph(&net.nodes, &net.connections).unwrap();
        let goal = graph.nodes()[goal.index(graph.len())].id().to_string();

        let failing: BTreeSet<String> = graph
            .nodes()
            .iter()
            .filter(|n| !find_path(&graph, n.id(), &goal).unwrap().is_found())
            .map(|n| n.id().to_string())
            .collect();
        let unreachable = find_unreachable_nodes(&graph, &goal).unwrap();
        prop_assert_eq!(&unreachable, &failing);
        prop_assert_eq!(&find_unreachable_nodes_par(&graph, &goal).unwrap(), &unreachable);

        let goal_idx = graph.idx_of(&goal).unwrap();
        let connected = connected_to(&graph, goal_idx);
        let all: BTreeSet<String> = graph.nodes().iter().map(|n| n.id().to_string()).collect();
        let expected: BTreeSet<String> = all.difference(&connected).cloned().collect();
        prop_assert_eq!(unreachable, expected);
    }

    #[test]
    fn trivial_path_has_zero_cost(net in network(10, 0.0..2.0), at in any::<Index>()) {
        let graph = build_graph(&net.nodes, &net.connections).unwrap();
        let id = graph.nodes()[at.index(graph.len())].id().to_string();
        let path = find_path(&graph, &id, &id).unwrap().into_path().unwrap();
        prop_assert_eq!(path.nodes, vec![id]);
        prop_assert_eq!(path.cost, 0.0);
    }
}
