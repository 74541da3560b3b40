use crate::entities::PairTokenLookup;
use alloy_primitives::Address;
use petgraph::graphmap::DiGraphMap;

/// Directed index from `(token, partner)` to the pair trading them.
///
/// Nodes are token addresses and every edge carries the pair address. A pair is always registered in both
/// directions at once and an edge is never overwritten afterwards.
#[derive(Debug, Clone)]
pub struct PairGraph {
    graph: DiGraphMap<Address, Address>,
}

impl Default for PairGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl PairGraph {
    pub fn new() -> Self {
        Self { graph: DiGraphMap::new() }
    }

    /// Register `pair` under `(token0, token1)` and `(token1, token0)`.
    ///
    /// Returns `false` and leaves the index untouched if either direction is already taken.
    pub fn add_pair(&mut self, token0: Address, token1: Address, pair: Address) -> bool {
        if self.graph.contains_edge(token0, token1) || self.graph.contains_edge(token1, token0) {
            return false;
        }
        self.graph.add_edge(token0, token1, pair);
        self.graph.add_edge(token1, token0, pair);
        true
    }

    pub fn get_pair(&self, token: &Address, partner: &Address) -> Option<Address> {
        self.graph.edge_weight(*token, *partner).copied()
    }

    pub fn lookup(&self, token: &Address, partner: &Address) -> Option<PairTokenLookup> {
        self.get_pair(token, partner).map(|pair| PairTokenLookup::new(*token, *partner, pair))
    }

    /// All directed entries, two per registered pair.
    pub fn lookups(&self) -> impl Iterator<Item = PairTokenLookup> + '_ {
        self.graph.all_edges().map(|(token, partner, pair)| PairTokenLookup::new(token, partner, *pair))
    }

    pub fn token_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn lookup_count(&self) -> usize {
        self.graph.edge_count()
    }
}
