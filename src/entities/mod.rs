pub mod bundle;
pub mod factory;
pub mod pair;
pub mod pair_lookup;
pub mod token;

pub use bundle::Bundle;
pub use factory::Factory;
pub use pair::{Pair, PairSide};
pub use pair_lookup::PairTokenLookup;
pub use token::Token;
