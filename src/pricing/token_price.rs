use crate::config::PricingConfig;
use crate::entities::{Bundle, Token};
use crate::store::EntityStore;
use crate::utils::decimal::{safe_div, safe_mul};
use alloy_primitives::Address;
use rust_decimal::Decimal;
use tracing::debug;

/// Price of `token` in reference-token units.
///
/// Resolution order:
/// 1. the reference token itself is worth one
/// 2. a stablecoin is the inverse of the bundle's USD price
/// 3. the first whitelist entry, in configured order, whose pair with the token holds more reference
///    liquidity than `minimum_liquidity_threshold_eth` prices it through that pair
///
/// The whitelist scan stops at the first qualifying route, even if a later one is deeper. The partner's
/// derived price is read from the store as last saved, never recomputed here.
pub fn find_eth_per_token<S: EntityStore + ?Sized>(token: &Token, bundle: Option<&Bundle>, store: &S, config: &PricingConfig) -> Decimal {
    let address = token.get_address();

    if config.is_reference_token(&address) {
        return Decimal::ONE;
    }

    if config.is_stablecoin(&address) {
        return match bundle {
            Some(bundle) => safe_div(Decimal::ONE, bundle.eth_price),
            None => Decimal::ZERO,
        };
    }

    for whitelisted in config.whitelist.iter() {
        if let Some(price) = whitelist_route_price(store, config, &address, whitelisted) {
            return price;
        }
    }

    debug!("No whitelisted route for token {:?}", address);
    Decimal::ZERO
}

fn whitelist_route_price<S: EntityStore + ?Sized>(store: &S, config: &PricingConfig, token: &Address, whitelisted: &Address) -> Option<Decimal> {
    let lookup = store.load_pair_lookup(token, whitelisted)?;
    let pair = store.load_pair(&lookup.pair)?;
    let side = pair.side_of(token)?;

    if pair.reserve_eth <= config.minimum_liquidity_threshold_eth {
        return None;
    }

    let partner = store.load_token(&pair.token(side.other()))?;
    debug!("Token {:?} priced through pair {:?} with {:?}", token, lookup.pair, whitelisted);
    Some(safe_mul(pair.quoted_price(side), partner.derived_eth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::test_utils::*;
    use crate::store::MemoryStore;

    fn store_with_whitelisted_tokens() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.save_token(token_with_price(REFERENCE, Decimal::ONE));
        store.save_token(token_with_price(WHITELISTED_A, Decimal::from(2)));
        store.save_token(token_with_price(WHITELISTED_B, Decimal::from(3)));
        store
    }

    #[test]
    fn test_reference_token_is_one() {
        let store = MemoryStore::new();
        let token = Token::new(REFERENCE);

        assert_eq!(find_eth_per_token(&token, None, &store, &test_config()), Decimal::ONE);
        assert_eq!(find_eth_per_token(&token, Some(&Bundle::with_eth_price(Decimal::from(1800))), &store, &test_config()), Decimal::ONE);
    }

    #[test]
    fn test_stablecoin_inverts_bundle_price() {
        let store = MemoryStore::new();
        let token = Token::new(STABLE_A);
        let config = test_config();

        let bundle = Bundle::with_eth_price(Decimal::from(2_000));
        assert_eq!(find_eth_per_token(&token, Some(&bundle), &store, &config), Decimal::new(5, 4));

        let zero_bundle = Bundle::new();
        assert_eq!(find_eth_per_token(&token, Some(&zero_bundle), &store, &config), Decimal::ZERO);
        assert_eq!(find_eth_per_token(&token, None, &store, &config), Decimal::ZERO);
    }

    #[test]
    fn test_prices_through_whitelisted_pair() {
        let config = test_config();
        let mut store = store_with_whitelisted_tokens();
        // 100 UNLISTED for 10 WHITELISTED_A, so one UNLISTED is 0.1 A = 0.2 reference
        add_pair(&mut store, Address::repeat_byte(0x01), UNLISTED, WHITELISTED_A, Decimal::from(100), Decimal::from(10), Decimal::from(40));

        let price = find_eth_per_token(&Token::new(UNLISTED), None, &store, &config);

        assert_eq!(price, Decimal::new(2, 1));
    }

    #[test]
    fn test_token_on_either_side() {
        let config = test_config();
        let mut store = store_with_whitelisted_tokens();
        add_pair(&mut store, Address::repeat_byte(0x01), WHITELISTED_A, UNLISTED, Decimal::from(10), Decimal::from(100), Decimal::from(40));

        assert_eq!(find_eth_per_token(&Token::new(UNLISTED), None, &store, &config), Decimal::new(2, 1));
    }

    #[test]
    fn test_first_qualifying_whitelist_entry_wins() {
        let config = test_config();
        let mut store = store_with_whitelisted_tokens();
        // WHITELISTED_A comes before WHITELISTED_B in the whitelist, the B pool is ten times deeper
        add_pair(&mut store, Address::repeat_byte(0x01), UNLISTED, WHITELISTED_A, Decimal::from(100), Decimal::from(10), Decimal::from(40));
        add_pair(&mut store, Address::repeat_byte(0x02), UNLISTED, WHITELISTED_B, Decimal::from(1_000), Decimal::from(500), Decimal::from(400));

        let price = find_eth_per_token(&Token::new(UNLISTED), None, &store, &config);

        // through A: 0.1 * 2, through B it would be 0.5 * 3
        assert_eq!(price, Decimal::new(2, 1));
    }

    #[test]
    fn test_shallow_pair_is_skipped() {
        let config = test_config();
        let mut store = store_with_whitelisted_tokens();
        // exactly at the threshold does not qualify
        add_pair(&mut store, Address::repeat_byte(0x01), UNLISTED, WHITELISTED_A, Decimal::from(100), Decimal::from(10), Decimal::from(2));
        add_pair(&mut store, Address::repeat_byte(0x02), UNLISTED, WHITELISTED_B, Decimal::from(1_000), Decimal::from(500), Decimal::from(400));

        assert_eq!(find_eth_per_token(&Token::new(UNLISTED), None, &store, &config), Decimal::new(15, 1));
    }

    #[test]
    fn test_missing_partner_token_continues_scan() {
        let config = test_config();
        let mut store = MemoryStore::new();
        store.save_token(token_with_price(WHITELISTED_B, Decimal::from(3)));
        // WHITELISTED_A has a pair but no token record
        add_pair(&mut store, Address::repeat_byte(0x01), UNLISTED, WHITELISTED_A, Decimal::from(100), Decimal::from(10), Decimal::from(40));
        add_pair(&mut store, Address::repeat_byte(0x02), UNLISTED, WHITELISTED_B, Decimal::from(1_000), Decimal::from(500), Decimal::from(400));

        assert_eq!(find_eth_per_token(&Token::new(UNLISTED), None, &store, &config), Decimal::new(15, 1));
    }

    #[test]
    fn test_no_route_is_zero() {
        let config = test_config();
        let mut store = store_with_whitelisted_tokens();
        add_pair(&mut store, Address::repeat_byte(0x01), UNLISTED, UNLISTED_OTHER, Decimal::from(100), Decimal::from(10), Decimal::from(40));

        assert_eq!(find_eth_per_token(&Token::new(UNLISTED), None, &store, &config), Decimal::ZERO);
    }

    #[test]
    fn test_empty_whitelist_is_zero() {
        let mut config = test_config();
        config.whitelist = Default::default();
        let mut store = store_with_whitelisted_tokens();
        add_pair(&mut store, Address::repeat_byte(0x01), UNLISTED, WHITELISTED_A, Decimal::from(100), Decimal::from(10), Decimal::from(40));

        assert_eq!(find_eth_per_token(&Token::new(UNLISTED), None, &store, &config), Decimal::ZERO);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let config = test_config();
        let mut store = store_with_whitelisted_tokens();
        add_pair(&mut store, Address::repeat_byte(0x01), UNLISTED, WHITELISTED_A, Decimal::from(7), Decimal::from(3), Decimal::from(40));
        let token = Token::new(UNLISTED);

        assert_eq!(find_eth_per_token(&token, None, &store, &config), find_eth_per_token(&token, None, &store, &config));
    }

    #[test]
    fn test_out_of_range_route_price_is_zero() {
        let config = test_config();
        let mut store = MemoryStore::new();
        store.save_token(token_with_price(WHITELISTED_A, Decimal::MAX));
        // one UNLISTED is 10 WHITELISTED_A, each worth the largest representable price
        add_pair(&mut store, Address::repeat_byte(0x01), UNLISTED, WHITELISTED_A, Decimal::ONE, Decimal::from(10), Decimal::from(40));

        assert_eq!(find_eth_per_token(&Token::new(UNLISTED), None, &store, &config), Decimal::ZERO);
    }
}
