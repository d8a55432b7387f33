//! State dispatch for the sorter control loop.
//!
//! Pending states are kept as a bit set; the dispatcher handles them one at
//! a time, lowest bit first.

mod dispatcher;
mod state;

pub use dispatcher::{Dispatcher, StateHandler};
pub use state::{StateFlags, SystemState};
