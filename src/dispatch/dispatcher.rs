//! Cooperative state dispatcher.
//!
//! One pending state is selected, cleared and handled to completion before
//! the flags are looked at again. Handlers may trigger further states,
//! including their own.

use crate::error::{DispatchError, Error, Result};

use super::state::{StateFlags, SystemState};

/// Application logic run for each dispatched state.
pub trait StateHandler {
    /// Handle `state`. The flag has already been cleared; set follow-up
    /// states on `flags`.
    ///
    /// # Errors
    ///
    /// Any error aborts the current dispatch and is returned to the caller.
    fn handle(&mut self, state: SystemState, flags: &mut StateFlags) -> Result<()>;
}

/// Pending-state owner and selection loop.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    flags: StateFlags,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Dispatcher with `Init` pending.
    pub fn new() -> Self {
        let mut flags = StateFlags::empty();
        flags.trigger(SystemState::Init);
        Self { flags }
    }

    /// Dispatcher starting from an explicit flag set.
    pub fn with_flags(flags: StateFlags) -> Self {
        Self { flags }
    }

    /// Pending states.
    #[inline]
    pub fn flags(&self) -> StateFlags {
        self.flags
    }

    /// Mark `state` pending, e.g. from a sensor poll.
    #[inline]
    pub fn trigger(&mut self, state: SystemState) {
        self.flags.trigger(state);
    }

    /// Handle the highest-priority pending state.
    ///
    /// Returns the state handled, or `None` if nothing was pending.
    ///
    /// # Errors
    ///
    /// Propagates the handler's error. The state stays cleared.
    pub fn dispatch_one<H: StateHandler>(&mut self, handler: &mut H) -> Result<Option<SystemState>> {
        let Some(state) = self.flags.next_pending() else {
            return Ok(None);
        };

        self.flags.process(state);

        #[cfg(feature = "defmt")]
        defmt::debug!("dispatch {} (pending {=u8:b})", state, self.flags.bits());

        handler.handle(state, &mut self.flags)?;
        Ok(Some(state))
    }

    /// Dispatch until nothing is pending, running at most `budget` handlers.
    ///
    /// Returns the number of handlers run.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::Budget` if states are still pending after
    /// `budget` handlers, or the first handler error.
    pub fn run_pending<H: StateHandler>(&mut self, handler: &mut H, budget: u32) -> Result<u32> {
        let mut iterations = 0;

        while iterations < budget {
            if self.dispatch_one(handler)?.is_none() {
                return Ok(iterations);
            }
            iterations += 1;
        }

        if self.flags.is_empty() {
            Ok(iterations)
        } else {
            Err(Error::Dispatch(DispatchError::Budget {
                iterations,
                pending: self.flags.bits(),
            }))
        }
    }
}
