use super::EntityStore;
use crate::entities::{Bundle, Factory, Pair, PairTokenLookup, Token};
use crate::graph::PairGraph;
use crate::utils::FastHashMap;
use alloy_primitives::Address;

/// In-memory [`EntityStore`]. Persist it with [`MemoryStore::save_to_file`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub(super) tokens: FastHashMap<Address, Token>,
    pub(super) pairs: FastHashMap<Address, Pair>,
    pub(super) factories: FastHashMap<Address, Factory>,
    pub(super) bundle: Option<Bundle>,
    pub(super) pair_graph: PairGraph,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair_graph(&self) -> &PairGraph {
        &self.pair_graph
    }

    pub fn tokens_len(&self) -> usize {
        self.tokens.len()
    }

    pub fn pairs_len(&self) -> usize {
        self.pairs.len()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.values()
    }

    pub fn pairs(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.values()
    }
}

impl EntityStore for MemoryStore {
    fn load_token(&self, address: &Address) -> Option<Token> {
        self.tokens.get(address).cloned()
    }

    fn save_token(&mut self, token: Token) {
        self.tokens.insert(token.get_address(), token);
    }

    fn load_pair(&self, address: &Address) -> Option<Pair> {
        self.pairs.get(address).cloned()
    }

    fn save_pair(&mut self, pair: Pair) {
        self.pairs.insert(pair.get_address(), pair);
    }

    fn load_bundle(&self) -> Option<Bundle> {
        self.bundle.clone()
    }

    fn save_bundle(&mut self, bundle: Bundle) {
        self.bundle = Some(bundle);
    }

    fn load_factory(&self, address: &Address) -> Option<Factory> {
        self.factories.get(address).cloned()
    }

    fn save_factory(&mut self, factory: Factory) {
        self.factories.insert(factory.get_address(), factory);
    }

    fn load_pair_lookup(&self, token: &Address, partner: &Address) -> Option<PairTokenLookup> {
        self.pair_graph.lookup(token, partner)
    }

    fn save_pair_lookups(&mut self, token0: Address, token1: Address, pair: Address) -> bool {
        self.pair_graph.add_pair(token0, token1, pair)
    }
}
