use crate::utils::decimal::safe_div;
use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum PairSide {
    Token0,
    Token1,
}

impl PairSide {
    pub fn other(&self) -> PairSide {
        match self {
            PairSide::Token0 => PairSide::Token1,
            PairSide::Token1 => PairSide::Token0,
        }
    }
}

/// A constant-product pool between two tokens.
///
/// `token0_price` is `reserve0 / reserve1`, the price of token1 in token0 units, and `token1_price` the
/// reverse. Both are zero while the denominator reserve is zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    address: Address,
    pub token0: Address,
    pub token1: Address,
    pub reserve0: Decimal,
    pub reserve1: Decimal,
    pub total_supply: Decimal,
    /// Both reserves valued in reference-token units
    pub reserve_eth: Decimal,
    /// Reserves counted into the global liquidity, in reference-token units
    pub tracked_reserve_eth: Decimal,
    pub reserve_usd: Decimal,
    pub token0_price: Decimal,
    pub token1_price: Decimal,
    pub volume_token0: Decimal,
    pub volume_token1: Decimal,
    pub volume_usd: Decimal,
    pub untracked_volume_usd: Decimal,
    pub tx_count: u64,
    pub liquidity_provider_count: u64,
    pub created_at_timestamp: u64,
    pub created_at_block_number: u64,
}

impl Pair {
    pub fn new(address: Address, token0: Address, token1: Address, block_number: u64, timestamp: u64) -> Self {
        Self { address, token0, token1, created_at_block_number: block_number, created_at_timestamp: timestamp, ..Default::default() }
    }

    pub fn get_address(&self) -> Address {
        self.address
    }

    pub fn get_tokens(&self) -> (Address, Address) {
        (self.token0, self.token1)
    }

    pub fn side_of(&self, token: &Address) -> Option<PairSide> {
        if self.token0 == *token {
            Some(PairSide::Token0)
        } else if self.token1 == *token {
            Some(PairSide::Token1)
        } else {
            None
        }
    }

    pub fn token(&self, side: PairSide) -> Address {
        match side {
            PairSide::Token0 => self.token0,
            PairSide::Token1 => self.token1,
        }
    }

    pub fn reserve(&self, side: PairSide) -> Decimal {
        match side {
            PairSide::Token0 => self.reserve0,
            PairSide::Token1 => self.reserve1,
        }
    }

    /// Price of the token on `side` expressed in units of the other token.
    pub fn quoted_price(&self, side: PairSide) -> Decimal {
        match side {
            PairSide::Token0 => self.token1_price,
            PairSide::Token1 => self.token0_price,
        }
    }

    /// Replace both reserves and requote.
    pub fn set_reserves(&mut self, reserve0: Decimal, reserve1: Decimal) {
        self.reserve0 = reserve0;
        self.reserve1 = reserve1;
        self.token0_price = safe_div(reserve0, reserve1);
        self.token1_price = safe_div(reserve1, reserve0);
    }
}
