use crate::config::PricingConfig;
use crate::store::EntityStore;
use crate::utils::decimal::{safe_add, safe_div, safe_mul};
use alloy_primitives::Address;
use rust_decimal::Decimal;
use tracing::debug;

/// USD price of the reference token, averaged over the configured stable pairs.
///
/// Each stable pair contributes the USD quote of the reference token weighted by the pair's reference-side
/// reserve. Pairs that are not indexed yet, or that do not hold the reference token, weigh nothing. With
/// no weight at all the price is zero.
pub fn eth_price_in_usd<S: EntityStore + ?Sized>(store: &S, config: &PricingConfig) -> Decimal {
    let contributions: Vec<(Decimal, Decimal)> =
        config.stable_token_pairs.iter().map(|pair_address| stable_pair_contribution(store, config, pair_address)).collect();

    let total_liquidity_eth = contributions.iter().fold(Decimal::ZERO, |total, (_, reserve)| safe_add(total, *reserve));
    if total_liquidity_eth <= Decimal::ZERO {
        debug!("No reference liquidity in {} stable pairs, ETH price is zero", config.stable_token_pairs.len());
        return Decimal::ZERO;
    }

    // Normalise each weight first to keep the division away from the large total
    contributions
        .iter()
        .fold(Decimal::ZERO, |weighted_price, (price, reserve)| safe_add(weighted_price, safe_mul(*price, safe_div(*reserve, total_liquidity_eth))))
}

/// Returns `(price, weight)` of one stable pair.
fn stable_pair_contribution<S: EntityStore + ?Sized>(store: &S, config: &PricingConfig, pair_address: &Address) -> (Decimal, Decimal) {
    let Some(pair) = store.load_pair(pair_address) else {
        debug!("Stable pair {:?} not indexed", pair_address);
        return (Decimal::ZERO, Decimal::ZERO);
    };

    match pair.side_of(&config.reference_token) {
        Some(side) => (pair.quoted_price(side), pair.reserve(side)),
        None => {
            debug!("Stable pair {:?} does not hold the reference token", pair_address);
            (Decimal::ZERO, Decimal::ZERO)
        }
    }
}
