use crate::utils::constants::BUNDLE_ID;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Singleton holding the reference token's USD price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    id: String,
    pub eth_price: Decimal,
}

impl Bundle {
    pub fn new() -> Self {
        Self { id: BUNDLE_ID.to_string(), eth_price: Decimal::ZERO }
    }

    pub fn with_eth_price(eth_price: Decimal) -> Self {
        Self { eth_price, ..Self::new() }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }
}

impl Default for Bundle {
    fn default() -> Self {
        Self::new()
    }
}
