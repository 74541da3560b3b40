use super::{MemoryStore, StoreError};
use crate::entities::{Bundle, Factory, Pair, PairTokenLookup, Token};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Serializable image of a [`MemoryStore`], records sorted by address.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub tokens: Vec<Token>,
    pub pairs: Vec<Pair>,
    pub factories: Vec<Factory>,
    pub bundle: Option<Bundle>,
    pub pair_lookups: Vec<PairTokenLookup>,
}

impl MemoryStore {
    pub fn snapshot(&self) -> StoreSnapshot {
        let mut tokens: Vec<Token> = self.tokens.values().cloned().collect();
        tokens.sort();
        let mut pairs: Vec<Pair> = self.pairs.values().cloned().collect();
        pairs.sort_by_key(|pair| pair.get_address());
        let mut factories: Vec<Factory> = self.factories.values().cloned().collect();
        factories.sort_by_key(|factory| factory.get_address());
        let mut pair_lookups: Vec<PairTokenLookup> = self.pair_graph.lookups().collect();
        pair_lookups.sort_by_key(|lookup| (lookup.token, lookup.partner));

        StoreSnapshot { tokens, pairs, factories, bundle: self.bundle.clone(), pair_lookups }
    }

    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let mut store = MemoryStore::new();
        store.tokens = snapshot.tokens.into_iter().map(|token| (token.get_address(), token)).collect();
        store.pairs = snapshot.pairs.into_iter().map(|pair| (pair.get_address(), pair)).collect();
        store.factories = snapshot.factories.into_iter().map(|factory| (factory.get_address(), factory)).collect();
        store.bundle = snapshot.bundle;

        // Each pair appears twice, the reverse entry is already registered by the first
        for lookup in snapshot.pair_lookups {
            if !store.pair_graph.add_pair(lookup.token, lookup.partner, lookup.pair)
                && store.pair_graph.get_pair(&lookup.token, &lookup.partner) != Some(lookup.pair)
            {
                warn!("Conflicting pair lookup {} -> {:?} ignored", lookup, lookup.pair);
            }
        }
        store
    }

    /// Write the store as JSON. The file is replaced atomically through a temp file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let bytes = serde_json::to_vec(&self.snapshot())?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, path)?;

        debug!("Saved store snapshot to {}", path.display());
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let bytes = fs::read(path.as_ref())?;
        let snapshot: StoreSnapshot = serde_json::from_slice(&bytes)?;
        Ok(Self::from_snapshot(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntityStore;
    use alloy_primitives::Address;
    use rust_decimal::Decimal;

    fn filled_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        let mut token = Token::new(Address::repeat_byte(1));
        token.derived_eth = Decimal::new(15, 1);
        store.save_token(token);
        store.save_token(Token::new(Address::repeat_byte(2)));

        let mut pair = Pair::new(Address::repeat_byte(3), Address::repeat_byte(1), Address::repeat_byte(2), 1, 2);
        pair.set_reserves(Decimal::from(10), Decimal::from(20));
        store.save_pair(pair);
        store.save_pair_lookups(Address::repeat_byte(1), Address::repeat_byte(2), Address::repeat_byte(3));
        store.save_bundle(Bundle::with_eth_price(Decimal::from(2000)));
        store.save_factory(Factory::new(Address::repeat_byte(4)));
        store
    }

    #[test]
    fn test_snapshot_round_trip() {
        let store = filled_store();
        let restored = MemoryStore::from_snapshot(store.snapshot());

        assert_eq!(restored.tokens_len(), 2);
        assert_eq!(restored.load_pair(&Address::repeat_byte(3)), store.load_pair(&Address::repeat_byte(3)));
        assert_eq!(restored.load_bundle(), store.load_bundle());
        assert_eq!(restored.pair_graph().lookup_count(), 2);
        assert_eq!(restored.load_pair_lookup(&Address::repeat_byte(2), &Address::repeat_byte(1)).map(|l| l.pair), Some(Address::repeat_byte(3)));
    }

    #[test]
    fn test_save_and_load_file() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("state").join("store.json");

        let store = filled_store();
        store.save_to_file(&path)?;
        let loaded = MemoryStore::load_from_file(&path)?;

        assert_eq!(loaded.load_token(&Address::repeat_byte(1)).map(|t| t.derived_eth), Some(Decimal::new(15, 1)));
        assert_eq!(loaded.load_factory(&Address::repeat_byte(4)), store.load_factory(&Address::repeat_byte(4)));
        assert!(!path.with_extension("tmp").exists());
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let result = MemoryStore::load_from_file("/nonexistent/dir/store.json");
        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
