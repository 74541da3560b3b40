use super::events::{SwapEvent, SyncEvent};
use super::outcome::{HandlerOutcome, SkipReason};
use crate::config::PricingConfig;
use crate::entities::{Pair, Token};
use crate::pricing::{eth_price_in_usd, find_eth_per_token, tracked_liquidity_usd, tracked_volume_usd};
use crate::store::EntityStore;
use crate::utils::decimal::{safe_add, safe_div, safe_mul};
use alloy_primitives::Address;
use rust_decimal::Decimal;
use tracing::{debug, warn};

fn load_pair_with_tokens<S: EntityStore + ?Sized>(store: &S, address: &Address) -> Result<(Pair, Token, Token), SkipReason> {
    let Some(pair) = store.load_pair(address) else {
        warn!("Event for unknown pair {:?}", address);
        return Err(SkipReason::UnknownPair);
    };
    match (store.load_token(&pair.token0), store.load_token(&pair.token1)) {
        (Some(token0), Some(token1)) => Ok((pair, token0, token1)),
        _ => {
            warn!("Pair {:?} has no token record for {:?} or {:?}", address, pair.token0, pair.token1);
            Err(SkipReason::MissingToken)
        }
    }
}

/// Apply new reserves to a pair and reprice everything that depends on them.
///
/// The pair's previous contribution to the factory and token liquidity is removed before the new one is
/// added, so the aggregates always hold the sum over the current reserves.
pub fn handle_sync<S: EntityStore + ?Sized>(event: &SyncEvent, store: &mut S, config: &PricingConfig) -> HandlerOutcome {
    let (mut pair, mut token0, mut token1) = match load_pair_with_tokens(store, &event.pair) {
        Ok(loaded) => loaded,
        Err(reason) => return reason.into(),
    };
    let Some(mut factory) = store.load_factory(&config.factory) else {
        warn!("Factory {:?} not found, sync for {:?} skipped", config.factory, event.pair);
        return SkipReason::MissingFactory.into();
    };

    factory.total_liquidity_eth -= pair.tracked_reserve_eth;
    token0.total_liquidity -= pair.reserve0;
    token1.total_liquidity -= pair.reserve1;

    pair.set_reserves(token0.to_decimal(event.reserve0), token1.to_decimal(event.reserve1));
    store.save_pair(pair.clone());

    let mut bundle = store.load_bundle().unwrap_or_default();
    bundle.eth_price = eth_price_in_usd(&*store, config);
    store.save_bundle(bundle.clone());

    // Both lookups see the counterpart's stored price from before this event
    token0.derived_eth = find_eth_per_token(&token0, Some(&bundle), &*store, config);
    token1.derived_eth = find_eth_per_token(&token1, Some(&bundle), &*store, config);
    store.save_token(token0.clone());
    store.save_token(token1.clone());

    let tracked_liquidity_eth =
        safe_div(tracked_liquidity_usd(pair.reserve0, &token0, pair.reserve1, &token1, Some(&bundle), config), bundle.eth_price);

    pair.tracked_reserve_eth = tracked_liquidity_eth;
    pair.reserve_eth = safe_add(safe_mul(pair.reserve0, token0.derived_eth), safe_mul(pair.reserve1, token1.derived_eth));
    pair.reserve_usd = safe_mul(pair.reserve_eth, bundle.eth_price);

    factory.total_liquidity_eth = safe_add(factory.total_liquidity_eth, tracked_liquidity_eth);
    factory.total_liquidity_usd = safe_mul(factory.total_liquidity_eth, bundle.eth_price);

    token0.total_liquidity = safe_add(token0.total_liquidity, pair.reserve0);
    token1.total_liquidity = safe_add(token1.total_liquidity, pair.reserve1);

    debug!(
        "Synced pair {:?}: reserve_eth={} tracked_reserve_eth={} eth_price={}",
        pair.get_address(),
        pair.reserve_eth,
        pair.tracked_reserve_eth,
        bundle.eth_price
    );

    store.save_pair(pair);
    store.save_factory(factory);
    store.save_token(token0);
    store.save_token(token1);
    HandlerOutcome::Applied
}

/// Accumulate the volume of one swap into the token, pair and factory records.
pub fn handle_swap<S: EntityStore + ?Sized>(event: &SwapEvent, store: &mut S, config: &PricingConfig) -> HandlerOutcome {
    let (mut pair, mut token0, mut token1) = match load_pair_with_tokens(store, &event.pair) {
        Ok(loaded) => loaded,
        Err(reason) => return reason.into(),
    };
    let Some(bundle) = store.load_bundle() else {
        warn!("No bundle yet, swap on {:?} skipped", event.pair);
        return SkipReason::MissingBundle.into();
    };
    let Some(mut factory) = store.load_factory(&config.factory) else {
        warn!("Factory {:?} not found, swap on {:?} skipped", config.factory, event.pair);
        return SkipReason::MissingFactory.into();
    };

    let amount0_total = safe_add(token0.to_decimal(event.amount0_in), token0.to_decimal(event.amount0_out));
    let amount1_total = safe_add(token1.to_decimal(event.amount1_in), token1.to_decimal(event.amount1_out));

    let derived_amount_eth = safe_add(safe_mul(token0.derived_eth, amount0_total), safe_mul(token1.derived_eth, amount1_total)) / Decimal::TWO;
    let derived_amount_usd = safe_mul(derived_amount_eth, bundle.eth_price);

    let tracked_amount_usd = tracked_volume_usd(amount0_total, &token0, amount1_total, &token1, &pair, Some(&bundle), config);
    let tracked_amount_eth = safe_div(tracked_amount_usd, bundle.eth_price);

    token0.trade_volume = safe_add(token0.trade_volume, amount0_total);
    token0.trade_volume_usd = safe_add(token0.trade_volume_usd, tracked_amount_usd);
    token0.untracked_volume_usd = safe_add(token0.untracked_volume_usd, derived_amount_usd);
    token0.tx_count += 1;

    token1.trade_volume = safe_add(token1.trade_volume, amount1_total);
    token1.trade_volume_usd = safe_add(token1.trade_volume_usd, tracked_amount_usd);
    token1.untracked_volume_usd = safe_add(token1.untracked_volume_usd, derived_amount_usd);
    token1.tx_count += 1;

    pair.volume_usd = safe_add(pair.volume_usd, tracked_amount_usd);
    pair.volume_token0 = safe_add(pair.volume_token0, amount0_total);
    pair.volume_token1 = safe_add(pair.volume_token1, amount1_total);
    pair.untracked_volume_usd = safe_add(pair.untracked_volume_usd, derived_amount_usd);
    pair.tx_count += 1;

    factory.total_volume_usd = safe_add(factory.total_volume_usd, tracked_amount_usd);
    factory.total_volume_eth = safe_add(factory.total_volume_eth, tracked_amount_eth);
    factory.untracked_volume_usd = safe_add(factory.untracked_volume_usd, derived_amount_usd);
    factory.tx_count += 1;

    debug!("Swap on {:?}: tracked_usd={} untracked_usd={}", pair.get_address(), tracked_amount_usd, derived_amount_usd);

    store.save_pair(pair);
    store.save_token(token0);
    store.save_token(token1);
    store.save_factory(factory);
    HandlerOutcome::Applied
}
