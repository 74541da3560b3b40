pub mod events;
mod factory;
mod outcome;
mod pair;
mod processor;


pub use events::{ChainEvent, EventPosition, PairCreatedEvent, SwapEvent, SyncEvent, TokenMetadata};
pub use factory::handle_new_pair;
pub use outcome::{HandlerOutcome, SkipReason};
pub use pair::{handle_swap, handle_sync};
pub use processor::EventProcessor;
