#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

//! Bizpulse Session - presentation-state lifecycle for the dashboard.
//!
//! Owns the single record slot and the loading flag behind an explicit
//! state machine, and talks to the synthesizer through an async
//! provider port so a real backend can later replace the simulated one
//! without touching the pure core.
//!
//! # Modules
//!
//! - [`state`] - The Intake / Loading / Display state machine
//! - [`provider`] - Async insight provider port and latency mock
//! - [`session`] - The session store (submit / regenerate / reset)

pub mod error;
pub mod provider;
pub mod session;
pub mod state;

pub use error::{Result, SessionError};
pub use provider::{InsightProvider, MockInsightProvider, ProviderLatency};
pub use session::Session;
pub use state::SessionState;
