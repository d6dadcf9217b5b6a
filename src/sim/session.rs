//! Simulation lifecycle
//!
//! The session owns the mutable state for the duration of each tick and
//! publishes an immutable snapshot once the tick completes. A rendering host
//! only ever reads the published snapshot, never the working state, so no
//! locking is needed in the single-threaded stepping model.

use super::state::{ConfigError, SimConfig, SimState, Snapshot};
use super::tick::{TickInput, tick};

/// Result of one session tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// Quit was requested; the tick body did not run and the previous
    /// snapshot remains the last published state.
    Quit,
}

/// A running simulation instance bound to a seed
#[derive(Debug, Clone)]
pub struct Simulation {
    state: SimState,
    published: Snapshot,
}

impl Simulation {
    /// Create a fresh instance. Configuration is validated before any tick
    /// runs; this is the simulation's only fatal error path.
    pub fn open(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = SimState::new(&config);
        let published = state.snapshot();
        log::info!(
            "simulation opened: seed {}, viewport {}x{}",
            config.seed,
            config.viewport.x,
            config.viewport.y
        );
        Ok(Self { state, published })
    }

    /// Advance one fixed step with the host's input snapshot. Quit is
    /// cooperative: checked once here, before any state is touched.
    pub fn tick(&mut self, input: &TickInput) -> TickOutcome {
        if input.quit {
            log::info!("quit requested at tick {}", self.state.tick);
            return TickOutcome::Quit;
        }

        tick(&mut self.state, input);
        self.published = self.state.snapshot();
        TickOutcome::Running
    }

    /// Snapshot of the last completed tick
    pub fn snapshot(&self) -> &Snapshot {
        &self.published
    }

    /// Stop ticking and release all state
    pub fn close(self) {
        log::info!("simulation closed at tick {}", self.state.tick);
    }
}
