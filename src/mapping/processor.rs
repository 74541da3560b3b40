use super::events::{ChainEvent, EventPosition};
use super::factory::handle_new_pair;
use super::outcome::{HandlerOutcome, SkipReason};
use super::pair::{handle_swap, handle_sync};
use crate::config::{PricingConfig, PricingConfigSection};
use crate::store::{EntityStore, MemoryStore};
use crate::utils::config_loader::{OracleConfigLoader, OracleConfigLoaderSync};
use std::path::Path;
use tracing::{debug, info, warn};

/// Applies chain events to a store strictly in chain order.
///
/// An event at or before the last accepted position is rejected with [`SkipReason::OutOfOrder`] and leaves
/// the position unchanged. Events skipped for a missing entity still advance it.
#[derive(Debug)]
pub struct EventProcessor<S: EntityStore = MemoryStore> {
    store: S,
    config: PricingConfig,
    last_position: Option<EventPosition>,
}

impl EventProcessor<MemoryStore> {
    pub fn from_config_file(file_name: impl AsRef<Path>) -> eyre::Result<Self> {
        let file_name = file_name.as_ref().to_string_lossy().to_string();
        let section = PricingConfigSection::load_section_from_file_sync(file_name.clone())?;
        info!("Loaded pricing config from {}", file_name);
        Ok(Self::new(MemoryStore::new(), section.into()))
    }

    pub async fn from_config_file_async(file_name: impl AsRef<Path>) -> eyre::Result<Self> {
        let file_name = file_name.as_ref().to_string_lossy().to_string();
        let section = PricingConfigSection::load_section_from_file(file_name.clone()).await?;
        info!("Loaded pricing config from {}", file_name);
        Ok(Self::new(MemoryStore::new(), section.into()))
    }
}

impl<S: EntityStore> EventProcessor<S> {
    pub fn new(store: S, config: PricingConfig) -> Self {
        Self { store, config, last_position: None }
    }

    /// Resume after `position`, e.g. for a store restored from a snapshot.
    pub fn with_last_position(self, position: EventPosition) -> Self {
        Self { last_position: Some(position), ..self }
    }

    pub fn process(&mut self, event: &ChainEvent) -> HandlerOutcome {
        let position = event.position();
        if let Some(last_position) = self.last_position {
            if position <= last_position {
                warn!("Out of order {} event for {:?} at {:?}, last applied {:?}", event, event.pair(), position, last_position);
                return SkipReason::OutOfOrder.into();
            }
        }
        self.last_position = Some(position);

        let outcome = match event {
            ChainEvent::PairCreated(event) => handle_new_pair(event, &mut self.store, &self.config),
            ChainEvent::Sync(event) => handle_sync(event, &mut self.store, &self.config),
            ChainEvent::Swap(event) => handle_swap(event, &mut self.store, &self.config),
        };
        if let HandlerOutcome::Skipped(reason) = outcome {
            debug!("Skipped {} event for {:?}: {}", event, event.pair(), reason);
        }
        outcome
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn last_position(&self) -> Option<EventPosition> {
        self.last_position
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
