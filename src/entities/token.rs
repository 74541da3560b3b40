use crate::utils::constants::DEFAULT_DECIMALS;
use crate::utils::decimal::{convert_token_to_decimal, exp10, safe_mul};
use alloy_primitives::{Address, U256};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A traded token and its running aggregates.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Token {
    address: Address,
    decimals: u8,
    name: Option<String>,
    symbol: Option<String>,
    pub total_supply: U256,
    /// Price in reference-token units
    pub derived_eth: Decimal,
    pub trade_volume: Decimal,
    pub trade_volume_usd: Decimal,
    pub untracked_volume_usd: Decimal,
    pub total_liquidity: Decimal,
    pub tx_count: u64,
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.get_address()
    }
}

impl Eq for Token {}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.address.cmp(&other.get_address())
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Token {
    pub fn new(address: Address) -> Token {
        Token { address, decimals: DEFAULT_DECIMALS, ..Token::default() }
    }

    pub fn new_with_data(address: Address, symbol: Option<String>, name: Option<String>, decimals: Option<u8>) -> Token {
        Token { address, symbol, name, decimals: decimals.unwrap_or(DEFAULT_DECIMALS), ..Token::default() }
    }

    pub fn get_symbol(&self) -> String {
        self.symbol.clone().unwrap_or(self.address.to_string())
    }

    pub fn get_name(&self) -> String {
        self.name.clone().unwrap_or(self.address.to_string())
    }

    pub fn get_decimals(&self) -> u8 {
        self.decimals
    }

    pub fn get_exp(&self) -> U256 {
        exp10(self.decimals)
    }

    pub fn get_address(&self) -> Address {
        self.address
    }

    /// Convert a raw amount of this token into token units.
    pub fn to_decimal(&self, value: U256) -> Decimal {
        convert_token_to_decimal(value, self.decimals)
    }

    /// USD value of one unit given the reference token's USD price.
    pub fn usd_price(&self, eth_price: Decimal) -> Decimal {
        safe_mul(self.derived_eth, eth_price)
    }
}
