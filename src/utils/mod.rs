pub mod config_loader;
pub mod constants;
pub mod decimal;

pub use config_loader::*;
pub use constants::*;
pub use decimal::{convert_token_to_decimal, safe_add, safe_div, safe_mul};

use ahash::RandomState;
use std::collections::{HashMap, HashSet};

pub type FastHasher = RandomState;
/// FastHashMap using ahash
pub type FastHashMap<K, V> = HashMap<K, V, FastHasher>;
/// FastHashSet using ahash
pub type FastHashSet<K> = HashSet<K, FastHasher>;
