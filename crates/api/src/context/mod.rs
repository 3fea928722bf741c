//! Application context - dependency injection container

use std::sync::Arc;

use rota_core::scheduling::ports::EventStore;
use rota_core::ScheduleService;
use rota_domain::{CalendarConfig, Event, Result};
use rota_infra::InMemoryEventStore;

/// Application context - holds the configuration, the event store, and the
/// services wired over it.
pub struct SchedulerContext {
    pub config: CalendarConfig,
    pub store: Arc<dyn EventStore>,
    pub schedule: ScheduleService,
}

impl SchedulerContext {
    /// Context over an empty in-memory store.
    pub fn new(config: CalendarConfig) -> Result<Self> {
        Self::with_store(config, Arc::new(InMemoryEventStore::new()))
    }

    /// Context over an in-memory store seeded with existing events.
    pub fn with_seed_events(config: CalendarConfig, events: Vec<Event>) -> Result<Self> {
        Self::with_store(config, Arc::new(InMemoryEventStore::with_events(events)?))
    }

    /// Context over an externally supplied store implementation.
    pub fn with_store(config: CalendarConfig, store: Arc<dyn EventStore>) -> Result<Self> {
        config.validate()?;
        let schedule = ScheduleService::new(Arc::clone(&store), config.clone())?;
        Ok(Self { config, store, schedule })
    }
}
