pub mod pricing_config;
pub mod token_set;

pub use pricing_config::{OracleConfigRoot, PricingConfig, PricingConfigSection};
pub use token_set::TokenSet;
