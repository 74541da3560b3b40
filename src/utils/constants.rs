use alloy_primitives::{Address, address};

pub const WETH: Address = address!("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
pub const DAI: Address = address!("0x6b175474e89094c44da98b954eedeac495271d0f");
pub const USDC: Address = address!("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
pub const USDT: Address = address!("0xdac17f958d2ee523a2206206994597c13d831ec7");
pub const WBTC: Address = address!("0x2260fac5e5542a773aa44fbcfedf7c193bc2c599");

/// Id of the singleton bundle record.
pub const BUNDLE_ID: &str = "1";

/// Pairs with fewer liquidity providers than this get the new-pair volume gate.
pub const NEW_PAIR_LP_COUNT: u64 = 5;

/// Decimals assumed for a token whose metadata did not carry any.
pub const DEFAULT_DECIMALS: u8 = 18;

#[non_exhaustive]
pub struct UniswapV2Mainnet;

impl UniswapV2Mainnet {
    pub const FACTORY: Address = address!("5c69bee701ef814a2b6a3edd4b1652cb9cc5aa6f");

    // Stable pairs used for the ETH/USD price, reference token on one side
    pub const DAI_WETH: Address = address!("a478c2975ab1ea89e8196811f51a7b7ade33eb11");
    pub const USDC_WETH: Address = address!("b4e16d0168e52d35cacd2c6185b44281ec28c9dc");
    pub const WETH_USDT: Address = address!("0d4a11d5eeaac28ec3f61d100daf4d40471f1852");
}
