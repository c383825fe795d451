//! Background services.

pub mod poller;

pub use poller::{PollIntervals, PollPhase, PollTask, spawn_poll_loops};
