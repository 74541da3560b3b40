use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Protocol-wide counters, keyed by the factory address.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Factory {
    address: Address,
    pub pair_count: u64,
    pub total_volume_usd: Decimal,
    pub total_volume_eth: Decimal,
    pub untracked_volume_usd: Decimal,
    pub total_liquidity_usd: Decimal,
    pub total_liquidity_eth: Decimal,
    pub tx_count: u64,
}

impl Factory {
    pub fn new(address: Address) -> Self {
        Self { address, ..Default::default() }
    }

    pub fn get_address(&self) -> Address {
        self.address
    }
}
