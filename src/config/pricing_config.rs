use super::token_set::TokenSet;
use crate::utils::config_loader::{LoadConfigError, OracleConfigLoader, OracleConfigLoaderSync, load_from_file, load_from_file_sync};
use crate::utils::constants::{DAI, USDC, USDT, UniswapV2Mainnet, WBTC, WETH};
use alloy_primitives::Address;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Deserialize, Debug)]
pub struct OracleConfigRoot {
    pub pricing: PricingConfigSection,
}

/// The `[pricing]` section as written in the config file.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PricingConfigSection {
    /// Factory address, keys the global aggregate record
    pub factory: Address,
    /// Wrapped native coin every derived price is expressed in
    pub reference_token: Address,
    /// Routing intermediaries, in priority order
    pub whitelist: Vec<Address>,
    pub stablecoins: Vec<Address>,
    /// Pairs averaged into the reference USD price
    pub stable_token_pairs: Vec<Address>,
    pub minimum_liquidity_threshold_eth: Decimal,
    pub minimum_new_pair_liquidity_eth: Decimal,
    pub minimum_usd_threshold_new_pairs: Decimal,
}

impl Default for PricingConfigSection {
    fn default() -> Self {
        Self {
            factory: UniswapV2Mainnet::FACTORY,
            reference_token: WETH,
            whitelist: vec![WETH, DAI, USDC, USDT, WBTC],
            stablecoins: vec![DAI, USDC, USDT],
            stable_token_pairs: vec![UniswapV2Mainnet::DAI_WETH, UniswapV2Mainnet::USDC_WETH, UniswapV2Mainnet::WETH_USDT],
            minimum_liquidity_threshold_eth: Decimal::from(2),
            minimum_new_pair_liquidity_eth: Decimal::ONE,
            minimum_usd_threshold_new_pairs: Decimal::from(400_000),
        }
    }
}

#[async_trait]
impl OracleConfigLoader for PricingConfigSection {
    type SectionType = PricingConfigSection;

    async fn load_section_from_file(file_name: String) -> Result<Self::SectionType, LoadConfigError> {
        let root: OracleConfigRoot = load_from_file(file_name).await?;
        Ok(root.pricing)
    }
}

impl OracleConfigLoaderSync for PricingConfigSection {
    type SectionType = PricingConfigSection;

    fn load_section_from_file_sync(file_name: String) -> Result<Self::SectionType, LoadConfigError> {
        let root: OracleConfigRoot = load_from_file_sync(file_name)?;
        Ok(root.pricing)
    }
}

/// Static pricing configuration shared by every resolver.
///
/// Empty lists are accepted; they only make the derived prices zero.
#[derive(Clone, Debug)]
pub struct PricingConfig {
    pub factory: Address,
    pub reference_token: Address,
    pub whitelist: TokenSet,
    pub stablecoins: TokenSet,
    pub stable_token_pairs: Vec<Address>,
    /// Reference-unit reserve a pair needs before it may route a price
    pub minimum_liquidity_threshold_eth: Decimal,
    /// Reference-unit liquidity floor for new pairs
    pub minimum_new_pair_liquidity_eth: Decimal,
    /// USD reserve a pair with few liquidity providers needs before its volume is tracked
    pub minimum_usd_threshold_new_pairs: Decimal,
}

impl PricingConfig {
    pub fn is_whitelisted(&self, token: &Address) -> bool {
        self.whitelist.contains(token)
    }

    pub fn is_stablecoin(&self, token: &Address) -> bool {
        self.stablecoins.contains(token)
    }

    pub fn is_reference_token(&self, token: &Address) -> bool {
        self.reference_token == *token
    }
}

impl From<PricingConfigSection> for PricingConfig {
    fn from(section: PricingConfigSection) -> Self {
        Self {
            factory: section.factory,
            reference_token: section.reference_token,
            whitelist: TokenSet::new(section.whitelist),
            stablecoins: TokenSet::new(section.stablecoins),
            stable_token_pairs: section.stable_token_pairs,
            minimum_liquidity_threshold_eth: section.minimum_liquidity_threshold_eth,
            minimum_new_pair_liquidity_eth: section.minimum_new_pair_liquidity_eth,
            minimum_usd_threshold_new_pairs: section.minimum_usd_threshold_new_pairs,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfigSection::default().into()
    }
}
