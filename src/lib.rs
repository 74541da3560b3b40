// Pricing core: pure functions over persisted state
pub mod pricing;

// Indexed state
pub mod entities;
pub mod graph;
pub mod store;

// Event mapping layer driving the pricing core
pub mod mapping;

// Configuration and shared helpers
pub mod config;
pub mod utils;

pub use config::{PricingConfig, PricingConfigSection, TokenSet};
pub use entities::{Bundle, Factory, Pair, PairSide, PairTokenLookup, Token};
pub use graph::PairGraph;
pub use mapping::{ChainEvent, EventPosition, EventProcessor, HandlerOutcome, SkipReason};
pub use pricing::{eth_price_in_usd, find_eth_per_token, token_tracked_liquidity_usd, tracked_liquidity_usd, tracked_volume_usd};
pub use store::{EntityStore, MemoryStore, StoreError, StoreSnapshot};
pub use utils::{FastHashMap, FastHashSet};
