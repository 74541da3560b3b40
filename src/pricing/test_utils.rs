//! Fixtures shared by the pricing tests.

use crate::config::{PricingConfig, PricingConfigSection};
use crate::entities::{Pair, Token};
use crate::store::{EntityStore, MemoryStore};
use alloy_primitives::Address;
use rust_decimal::Decimal;

pub const REFERENCE: Address = Address::repeat_byte(0xee);
pub const STABLE_A: Address = Address::repeat_byte(0xa1);
pub const STABLE_B: Address = Address::repeat_byte(0xa2);
pub const WHITELISTED_A: Address = Address::repeat_byte(0xb1);
pub const WHITELISTED_B: Address = Address::repeat_byte(0xb2);
pub const UNLISTED: Address = Address::repeat_byte(0xc1);
pub const UNLISTED_OTHER: Address = Address::repeat_byte(0xc2);

pub fn test_config() -> PricingConfig {
    PricingConfigSection {
        factory: Address::repeat_byte(0xff),
        reference_token: REFERENCE,
        whitelist: vec![REFERENCE, WHITELISTED_A, WHITELISTED_B, STABLE_A, STABLE_B],
        stablecoins: vec![STABLE_A, STABLE_B],
        stable_token_pairs: vec![Address::repeat_byte(0x51), Address::repeat_byte(0x52)],
        minimum_liquidity_threshold_eth: Decimal::from(2),
        minimum_new_pair_liquidity_eth: Decimal::ONE,
        minimum_usd_threshold_new_pairs: Decimal::from(1_000),
    }
    .into()
}

pub fn token_with_price(address: Address, derived_eth: Decimal) -> Token {
    let mut token = Token::new(address);
    token.derived_eth = derived_eth;
    token
}

/// Store a pair with the given reserves and `reserve_eth`, registering its lookups.
pub fn add_pair(
    store: &mut MemoryStore,
    pair_address: Address,
    token0: Address,
    token1: Address,
    reserve0: Decimal,
    reserve1: Decimal,
    reserve_eth: Decimal,
) -> Pair {
    let mut pair = Pair::new(pair_address, token0, token1, 1, 1);
    pair.set_reserves(reserve0, reserve1);
    pair.reserve_eth = reserve_eth;
    store.save_pair(pair.clone());
    store.save_pair_lookups(token0, token1, pair_address);
    pair
}
