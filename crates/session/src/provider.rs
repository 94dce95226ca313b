//! The insight provider port.
//!
//! An explicit asynchronous boundary between the session store and
//! whatever produces analytics. Today that is the latency-simulating
//! mock around the synthesizer; a real backend client implements the
//! same trait and slots in without touching the pure core.

use std::time::Duration;

use async_trait::async_trait;
use bizpulse_insight::{BusinessProfile, BusinessRecord, DefaultSynthesizer, Synthesizer};
use tokio::sync::Mutex;

use crate::error::Result;

/// Trait for insight backends.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Fetch a fresh analytics record for a validated profile.
    async fn fetch_insights(&self, profile: &BusinessProfile) -> Result<BusinessRecord>;

    /// Re-derive only the headline of an existing record.
    ///
    /// The returned record must be identical to the input except for
    /// `headline`.
    async fn refresh_headline(&self, record: &BusinessRecord) -> Result<BusinessRecord>;

    /// Provider name for logging.
    fn name(&self) -> &str;
}

/// Simulated latency per operation.
///
/// A placeholder for a future real backend call; no retry or
/// cancellation semantics are attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderLatency {
    /// Delay before a submission returns.
    pub fetch: Duration,
    /// Delay before a headline regeneration returns.
    pub refresh: Duration,
}

impl ProviderLatency {
    /// No delay at all; the configuration tests run with.
    pub const fn zero() -> Self {
        Self {
            fetch: Duration::ZERO,
            refresh: Duration::ZERO,
        }
    }
}

impl Default for ProviderLatency {
    fn default() -> Self {
        Self {
            fetch: Duration::from_millis(1500),
            refresh: Duration::from_millis(800),
        }
    }
}

/// Mock provider: sleeps for the configured latency, then synthesizes.
pub struct MockInsightProvider {
    synth: Mutex<DefaultSynthesizer>,
    latency: ProviderLatency,
}

impl MockInsightProvider {
    /// Creates a mock with entropy seeding and production latency.
    pub fn new() -> Self {
        Self {
            synth: Mutex::new(Synthesizer::new()),
            latency: ProviderLatency::default(),
        }
    }

    /// Creates a deterministic mock from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            synth: Mutex::new(Synthesizer::from_seed(seed)),
            latency: ProviderLatency::default(),
        }
    }

    /// Overrides the simulated latency.
    pub fn with_latency(mut self, latency: ProviderLatency) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for MockInsightProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InsightProvider for MockInsightProvider {
    async fn fetch_insights(&self, profile: &BusinessProfile) -> Result<BusinessRecord> {
        tokio::time::sleep(self.latency.fetch).await;
        let mut synth = self.synth.lock().await;
        Ok(synth.synthesize(profile))
    }

    async fn refresh_headline(&self, record: &BusinessRecord) -> Result<BusinessRecord> {
        tokio::time::sleep(self.latency.refresh).await;
        let mut synth = self.synth.lock().await;
        Ok(synth.regenerate_headline(record))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
