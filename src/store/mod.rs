pub mod memory;
pub mod snapshot;

pub use memory::MemoryStore;
pub use snapshot::StoreSnapshot;

use crate::entities::{Bundle, Factory, Pair, PairTokenLookup, Token};
use alloy_primitives::Address;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Keyed load/save access to the indexed entities.
///
/// Loads hand out owned copies and saves replace the whole record; there are no partial writes.
pub trait EntityStore {
    fn load_token(&self, address: &Address) -> Option<Token>;

    fn save_token(&mut self, token: Token);

    fn load_pair(&self, address: &Address) -> Option<Pair>;

    fn save_pair(&mut self, pair: Pair);

    fn load_bundle(&self) -> Option<Bundle>;

    fn save_bundle(&mut self, bundle: Bundle);

    fn load_factory(&self, address: &Address) -> Option<Factory>;

    fn save_factory(&mut self, factory: Factory);

    fn load_pair_lookup(&self, token: &Address, partner: &Address) -> Option<PairTokenLookup>;

    /// Register `pair` for both token orders at once. Returns `false` if the tokens already have a pair.
    fn save_pair_lookups(&mut self, token0: Address, token1: Address, pair: Address) -> bool;
}
