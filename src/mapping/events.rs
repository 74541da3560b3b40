use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::Display;

/// Position of a log on chain. Events are applied in this order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventPosition {
    pub block_number: u64,
    pub log_index: u64,
}

impl EventPosition {
    pub fn new(block_number: u64, log_index: u64) -> Self {
        Self { block_number, log_index }
    }
}

impl Ord for EventPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.block_number.cmp(&other.block_number).then(self.log_index.cmp(&other.log_index))
    }
}

impl PartialOrd for EventPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Token metadata carried along with a pair creation. Missing decimals fall back to 18.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub decimals: Option<u8>,
    pub total_supply: Option<U256>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairCreatedEvent {
    pub pair: Address,
    pub token0: Address,
    pub token1: Address,
    pub token0_metadata: TokenMetadata,
    pub token1_metadata: TokenMetadata,
    pub position: EventPosition,
    pub timestamp: u64,
}

/// Raw reserves reported by a pair after any state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyncEvent {
    pub pair: Address,
    pub reserve0: U256,
    pub reserve1: U256,
    pub position: EventPosition,
    pub timestamp: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwapEvent {
    pub pair: Address,
    pub amount0_in: U256,
    pub amount1_in: U256,
    pub amount0_out: U256,
    pub amount1_out: U256,
    pub position: EventPosition,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Display, PartialEq, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum ChainEvent {
    PairCreated(PairCreatedEvent),
    Sync(SyncEvent),
    Swap(SwapEvent),
}

impl ChainEvent {
    pub fn position(&self) -> EventPosition {
        match self {
            ChainEvent::PairCreated(event) => event.position,
            ChainEvent::Sync(event) => event.position,
            ChainEvent::Swap(event) => event.position,
        }
    }

    pub fn pair(&self) -> Address {
        match self {
            ChainEvent::PairCreated(event) => event.pair,
            ChainEvent::Sync(event) => event.pair,
            ChainEvent::Swap(event) => event.pair,
        }
    }
}

impl From<PairCreatedEvent> for ChainEvent {
    fn from(event: PairCreatedEvent) -> Self {
        ChainEvent::PairCreated(event)
    }
}

impl From<SyncEvent> for ChainEvent {
    fn from(event: SyncEvent) -> Self {
        ChainEvent::Sync(event)
    }
}

impl From<SwapEvent> for ChainEvent {
    fn from(event: SwapEvent) -> Self {
        ChainEvent::Swap(event)
    }
}
