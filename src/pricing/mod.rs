pub mod reference_price;
pub mod token_price;
pub mod tracked;

#[cfg(test)]
pub(crate) mod test_utils;

pub use reference_price::eth_price_in_usd;
pub use token_price::find_eth_per_token;
pub use tracked::{token_tracked_liquidity_usd, tracked_liquidity_usd, tracked_volume_usd};
