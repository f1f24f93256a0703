//! Application state for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use chrono::FixedOffset;

use crate::config::ServerConfig;
use crate::models::{CalendarDate, TableError};
use crate::services::{Clock, PregnancyWeekTable, PricingTable, VaccinationScheduleBuilder};

/// Shared application state passed to all handlers.
///
/// The reference tables are parsed once at startup and shared read-only.
#[derive(Clone)]
pub struct AppState {
    /// Source of the current instant
    pub clock: Arc<dyn Clock>,
    /// Offset whose calendar date counts as "today"
    pub reference_offset: FixedOffset,
    pub vaccination: Arc<VaccinationScheduleBuilder>,
    pub pregnancy_weeks: Arc<PregnancyWeekTable>,
    pub pricing: Arc<PricingTable>,
}

impl AppState {
    pub fn new(
        clock: Arc<dyn Clock>,
        reference_offset: FixedOffset,
        vaccination: VaccinationScheduleBuilder,
        pregnancy_weeks: PregnancyWeekTable,
        pricing: PricingTable,
    ) -> Self {
        Self {
            clock,
            reference_offset,
            vaccination: Arc::new(vaccination),
            pregnancy_weeks: Arc::new(pregnancy_weeks),
            pricing: Arc::new(pricing),
        }
    }

    /// State backed by the tables compiled into the crate.
    pub fn with_embedded_tables(
        clock: Arc<dyn Clock>,
        reference_offset: FixedOffset,
    ) -> Result<Self, TableError> {
        Ok(Self::new(
            clock,
            reference_offset,
            VaccinationScheduleBuilder::embedded()?,
            PregnancyWeekTable::embedded()?,
            PricingTable::embedded()?,
        ))
    }

    /// Build the state described by `config`, loading the pricing table
    /// override when one is configured.
    pub fn from_config(config: &ServerConfig, clock: Arc<dyn Clock>) -> anyhow::Result<Self> {
        let offset = config.reference_offset()?;
        let mut state = Self::with_embedded_tables(clock, offset)
            .context("embedded reference tables are invalid")?;

        if let Some(path) = &config.pricing_table {
            let pricing = PricingTable::from_file(path)
                .with_context(|| format!("loading pricing table {}", path.display()))?;
            log::info!("using pricing table {}", path.display());
            state.pricing = Arc::new(pricing);
        }

        Ok(state)
    }

    /// Today's date in the reference offset.
    pub fn today(&self) -> CalendarDate {
        self.clock.today(self.reference_offset)
    }
}
