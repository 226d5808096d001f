//! Traversal tests: breadth-first and depth-first visitation order.

use keyed_graph::types::error::GraphError;
use keyed_graph::{Graph, GraphBuilder, Node};

/// Six nodes a..f joined by zero-weight undirected edges.
fn search_graph() -> Graph {
    let edges = [
        ("a", "b"),
        ("a", "e"),
        ("a", "f"),
        ("b", "d"),
        ("b", "e"),
        ("c", "b"),
        ("d", "c"),
        ("d", "e"),
    ];
    let mut builder = GraphBuilder::new().nodes(["a", "b", "c", "d", "e", "f"]);
    for (from, to) in edges {
        builder = builder.edge(from, to, 0.0);
    }
    builder.build().unwrap()
}

fn bfs_order(g: &Graph, start: &str) -> Vec<String> {
    let mut order = Vec::new();
    g.bfs(start, |node| order.push(node.key().to_string()))
        .unwrap();
    order
}

fn dfs_order(g: &Graph, start: &str) -> Vec<String> {
    let mut order = Vec::new();
    g.dfs(start, |node| order.push(node.key().to_string()))
        .unwrap();
    order
}

// ==================== BFS Tests ====================

#[test]
fn test_breadth_first_search_order() {
    let g = search_graph();
    assert_eq!(bfs_order(&g, "a"), vec!["a", "b", "e", "f", "d", "c"]);
}

#[test]
fn test_bfs_iter_matches_visitor() {
    let g = search_graph();
    let keys: Vec<&str> = g.bfs_iter("a").unwrap().map(Node::key).collect();
    assert_eq!(keys, bfs_order(&g, "a"));
}

#[test]
fn test_bfs_unknown_start() {
    let g = search_graph();
    let mut calls = 0;
    let err = g.bfs("z", |_| calls += 1).unwrap_err();
    assert_eq!(err, GraphError::NodeNotFound("z".to_string()));
    assert_eq!(calls, 0);
}

#[test]
fn test_bfs_only_reachable_nodes() {
    let mut g = search_graph();
    g.add_node("island");
    assert!(!bfs_order(&g, "a").contains(&"island".to_string()));
    assert_eq!(bfs_order(&g, "island"), vec!["island"]);
}

// ==================== DFS Tests ====================

#[test]
fn test_depth_first_search_order() {
    let g = search_graph();
    assert_eq!(dfs_order(&g, "a"), vec!["a", "b", "d", "c", "e", "f"]);
}

#[test]
fn test_dfs_iter_matches_visitor() {
    let g = search_graph();
    let keys: Vec<&str> = g.dfs_iter("a").unwrap().map(Node::key).collect();
    assert_eq!(keys, dfs_order(&g, "a"));
}

#[test]
fn test_dfs_unknown_start() {
    let g = search_graph();
    assert_eq!(
        g.dfs("z", |_| {}).unwrap_err(),
        GraphError::NodeNotFound("z".to_string())
    );
}

// ==================== Shared Behaviour ====================

#[test]
fn test_repeated_edges_visit_once() {
    let mut g = search_graph();
    g.add_edge("a", "b", 1.0).unwrap();
    g.add_edge("a", "b", 2.0).unwrap();
    g.add_edge("c", "c", 0.0).unwrap();

    for order in [bfs_order(&g, "a"), dfs_order(&g, "a")] {
        assert_eq!(order.len(), 6);
        let mut sorted = order.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 6);
    }
}

#[test]
fn test_directed_traversal_follows_edge_direction() {
    let g = GraphBuilder::new()
        .directed(true)
        .nodes(["a", "b", "c"])
        .edge("a", "b", 1.0)
        .edge("c", "a", 1.0)
        .build()
        .unwrap();
    assert_eq!(bfs_order(&g, "a"), vec!["a", "b"]);
    assert_eq!(dfs_order(&g, "c"), vec!["c", "a", "b"]);
}

#[test]
fn test_traversal_idempotent() {
    let g = search_graph();
    assert_eq!(bfs_order(&g, "d"), bfs_order(&g, "d"));
    assert_eq!(dfs_order(&g, "d"), dfs_order(&g, "d"));
}

#[derive(Debug, PartialEq)]
enum VisitError {
    Graph(GraphError),
    Stop(String),
}

impl From<GraphError> for VisitError {
    fn from(err: GraphError) -> Self {
        VisitError::Graph(err)
    }
}

#[test]
fn test_visitor_error_propagates() {
    let g = search_graph();
    let mut seen = Vec::new();
    let result = g.try_bfs("a", |node| {
        seen.push(node.key().to_string());
        if node.key() == "e" {
            return Err(VisitError::Stop(node.key().to_string()));
        }
        Ok(())
    });
    assert_eq!(result, Err(VisitError::Stop("e".to_string())));
    assert_eq!(seen, vec!["a", "b", "e"]);

    let result: Result<(), VisitError> = g.try_dfs("z", |_| Ok(()));
    assert_eq!(
        result,
        Err(VisitError::Graph(GraphError::NodeNotFound("z".to_string())))
    );
}

#[test]
fn test_try_dfs_completes() {
    let g = search_graph();
    let mut count = 0;
    let result: Result<(), VisitError> = g.try_dfs("a", |_| {
        count += 1;
        Ok(())
    });
    assert!(result.is_ok());
    assert_eq!(count, 6);
}
