use super::events::{PairCreatedEvent, TokenMetadata};
use super::outcome::{HandlerOutcome, SkipReason};
use crate::config::PricingConfig;
use crate::entities::{Bundle, Factory, Pair, Token};
use crate::store::EntityStore;
use alloy_primitives::{Address, U256};
use tracing::{info, warn};

/// Register a newly created pair.
///
/// The first pair ever seen also creates the factory aggregate and the bundle. Tokens are created on first
/// sight from the event's metadata and never overwritten afterwards. Both lookup directions are registered
/// together with the pair.
pub fn handle_new_pair<S: EntityStore + ?Sized>(event: &PairCreatedEvent, store: &mut S, config: &PricingConfig) -> HandlerOutcome {
    if store.load_pair(&event.pair).is_some() || store.load_pair_lookup(&event.token0, &event.token1).is_some() {
        warn!("Pair {:?} for {:?}/{:?} already registered", event.pair, event.token0, event.token1);
        return SkipReason::PairExists.into();
    }

    let mut factory = match store.load_factory(&config.factory) {
        Some(factory) => factory,
        None => {
            store.save_bundle(Bundle::new());
            Factory::new(config.factory)
        }
    };
    factory.pair_count += 1;
    store.save_factory(factory);

    load_or_create_token(store, event.token0, &event.token0_metadata);
    load_or_create_token(store, event.token1, &event.token1_metadata);

    let pair = Pair::new(event.pair, event.token0, event.token1, event.position.block_number, event.timestamp);
    store.save_pair(pair);
    store.save_pair_lookups(event.token0, event.token1, event.pair);

    info!("New pair {:?} for {:?}/{:?} at block {}", event.pair, event.token0, event.token1, event.position.block_number);
    HandlerOutcome::Applied
}

fn load_or_create_token<S: EntityStore + ?Sized>(store: &mut S, address: Address, metadata: &TokenMetadata) {
    if store.load_token(&address).is_some() {
        return;
    }

    let mut token = Token::new_with_data(address, metadata.symbol.clone(), metadata.name.clone(), metadata.decimals);
    token.total_supply = metadata.total_supply.unwrap_or(U256::ZERO);
    store.save_token(token);
}
