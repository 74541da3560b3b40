use crate::config::PricingConfig;
use crate::entities::{Bundle, Pair, Token};
use crate::utils::constants::NEW_PAIR_LP_COUNT;
use crate::utils::decimal::{safe_add, safe_mul};
use rust_decimal::Decimal;
use tracing::debug;

/// USD volume of one swap that counts into the tracked totals.
///
/// Only whitelisted sides are trusted. With both sides whitelisted the two legs are averaged, with one the
/// trusted leg is used alone, with none nothing is tracked. Pairs with fewer than five liquidity providers
/// must first hold `minimum_usd_threshold_new_pairs` of whitelisted reserves.
pub fn tracked_volume_usd(
    amount0: Decimal,
    token0: &Token,
    amount1: Decimal,
    token1: &Token,
    pair: &Pair,
    bundle: Option<&Bundle>,
    config: &PricingConfig,
) -> Decimal {
    let Some(bundle) = bundle else {
        return Decimal::ZERO;
    };

    let price0 = token0.usd_price(bundle.eth_price);
    let price1 = token1.usd_price(bundle.eth_price);
    let whitelisted0 = config.is_whitelisted(&token0.get_address());
    let whitelisted1 = config.is_whitelisted(&token1.get_address());

    if pair.liquidity_provider_count < NEW_PAIR_LP_COUNT {
        let reserve0_usd = safe_mul(pair.reserve0, price0);
        let reserve1_usd = safe_mul(pair.reserve1, price1);
        let floor = config.minimum_usd_threshold_new_pairs;

        let below_floor = match (whitelisted0, whitelisted1) {
            (true, true) => safe_add(reserve0_usd, reserve1_usd) < floor,
            (true, false) => safe_mul(reserve0_usd, Decimal::TWO) < floor,
            (false, true) => safe_mul(reserve1_usd, Decimal::TWO) < floor,
            (false, false) => false,
        };
        if below_floor {
            debug!("Pair {:?} below new pair USD threshold, volume not tracked", pair.get_address());
            return Decimal::ZERO;
        }
    }

    match (whitelisted0, whitelisted1) {
        (true, true) => safe_add(safe_mul(amount0, price0), safe_mul(amount1, price1)) / Decimal::TWO,
        (true, false) => safe_mul(amount0, price0),
        (false, true) => safe_mul(amount1, price1),
        (false, false) => Decimal::ZERO,
    }
}

/// USD value of a pool's reserves that counts into the tracked liquidity.
///
/// A single whitelisted side is doubled, assuming a balanced pool.
pub fn tracked_liquidity_usd(
    amount0: Decimal,
    token0: &Token,
    amount1: Decimal,
    token1: &Token,
    bundle: Option<&Bundle>,
    config: &PricingConfig,
) -> Decimal {
    let Some(bundle) = bundle else {
        return Decimal::ZERO;
    };

    let price0 = token0.usd_price(bundle.eth_price);
    let price1 = token1.usd_price(bundle.eth_price);

    match (config.is_whitelisted(&token0.get_address()), config.is_whitelisted(&token1.get_address())) {
        (true, true) => safe_add(safe_mul(amount0, price0), safe_mul(amount1, price1)),
        (true, false) => safe_mul(safe_mul(amount0, price0), Decimal::TWO),
        (false, true) => safe_mul(safe_mul(amount1, price1), Decimal::TWO),
        (false, false) => Decimal::ZERO,
    }
}

/// Tracked USD liquidity attributed to `token` alone within a pool shared with `companion`.
pub fn token_tracked_liquidity_usd(
    token: &Token,
    token_amount: Decimal,
    companion: &Token,
    bundle: Option<&Bundle>,
    config: &PricingConfig,
) -> Decimal {
    let Some(bundle) = bundle else {
        return Decimal::ZERO;
    };

    if config.is_whitelisted(&token.get_address()) || config.is_whitelisted(&companion.get_address()) {
        safe_mul(token_amount, token.usd_price(bundle.eth_price))
    } else {
        Decimal::ZERO
    }
}
