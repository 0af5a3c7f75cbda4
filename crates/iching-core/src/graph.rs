//! Relationship graph over the catalog.
//!
//! Nodes are the 8 trigrams followed by the 64 hexagrams. Each hexagram has
//! an edge to its bottom and top trigram, then one edge per change to every
//! other hexagram, labelled with the change's bit string.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::symbol::{Position, SymbolKind};

/// A node in the relationship graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// `t{n}` for trigrams, `h{n}` for hexagrams.
    pub id: String,
    /// Which kind of symbol this node stands for.
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    /// The symbol's Unicode glyph.
    pub name: String,
    /// The symbol's catalog number.
    pub number: u32,
}

/// A directed edge in the relationship graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Unique edge identifier.
    pub id: String,
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// `top`/`bottom` for trigram links, the change binary for hexagram links.
    pub name: String,
}

/// The full relationship graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    /// Trigram nodes, then hexagram nodes.
    pub nodes: Vec<Node>,
    /// Trigram links and change edges, grouped by source hexagram.
    pub edges: Vec<Edge>,
}

fn trigram_id(number: u32) -> String {
    format!("t{number}")
}

fn hexagram_id(number: u32) -> String {
    format!("h{number}")
}

impl Catalog {
    /// The relationship graph, built on first call and cached.
    pub fn as_graph(&self) -> &Graph {
        self.graph.get_or_init(|| {
            let graph = build_graph(self);
            tracing::debug!(
                nodes = graph.nodes.len(),
                edges = graph.edges.len(),
                "built relationship graph"
            );
            graph
        })
    }
}

fn build_graph(catalog: &Catalog) -> Graph {
    let mut graph = Graph::default();

    for t in catalog.trigrams() {
        graph.nodes.push(Node {
            id: trigram_id(t.number),
            kind: SymbolKind::Trigram,
            name: t.character.clone(),
            number: t.number,
        });
    }

    for h in catalog.hexagrams() {
        let id = hexagram_id(h.number);
        graph.nodes.push(Node {
            id: id.clone(),
            kind: SymbolKind::Hexagram,
            name: h.character.clone(),
            number: h.number,
        });

        for position in [Position::Bottom, Position::Top] {
            let trigram = h.trigram_at(position);
            graph.edges.push(Edge {
                id: format!("{id}-t{trigram}-{position}"),
                from: id.clone(),
                to: trigram_id(trigram),
                name: position.to_string(),
            });
        }

        for change in catalog.changes(h) {
            graph.edges.push(Edge {
                id: format!("{id}-h{}", change.to),
                from: id.clone(),
                to: hexagram_id(change.to),
                name: change.binary.clone(),
            });
        }
    }

    graph
}
