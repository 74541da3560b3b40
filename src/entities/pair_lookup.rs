use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Directed entry `(token, partner) -> pair`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairTokenLookup {
    pub token: Address,
    pub partner: Address,
    pub pair: Address,
}

impl PairTokenLookup {
    pub fn new(token: Address, partner: Address, pair: Address) -> Self {
        Self { token, partner, pair }
    }
}

impl Display for PairTokenLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}-{:#x}", self.token, self.partner)
    }
}
