//! Metrics collection and registry.

use crate::mnemonic::EncoderStats;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// Prometheus metrics registry for mnemonic generation.
pub struct MetricsRegistry {
    registry: Registry,
    mnemonics_encoded: IntCounter,
    rejected_requests: IntCounter,
    entropy_failures: IntCounter,
    hash_failures: IntCounter,
    entropy_bytes_drawn: IntCounter,
}

impl MetricsRegistry {
    /// Creates a new registry with all encoder metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let mnemonics_encoded = IntCounter::new(
            "bip39_mnemonics_encoded_total",
            "Total mnemonics successfully encoded",
        )?;
        let rejected_requests = IntCounter::new(
            "bip39_rejected_requests_total",
            "Requests rejected for an unsupported word count or entropy length",
        )?;
        let entropy_failures = IntCounter::new(
            "bip39_entropy_failures_total",
            "Encodes aborted by an entropy source failure",
        )?;
        let hash_failures = IntCounter::new(
            "bip39_hash_failures_total",
            "Encodes aborted by a checksum digest failure",
        )?;
        let entropy_bytes_drawn = IntCounter::new(
            "bip39_entropy_bytes_drawn_total",
            "Random bytes drawn from the entropy source",
        )?;

        registry.register(Box::new(mnemonics_encoded.clone()))?;
        registry.register(Box::new(rejected_requests.clone()))?;
        registry.register(Box::new(entropy_failures.clone()))?;
        registry.register(Box::new(hash_failures.clone()))?;
        registry.register(Box::new(entropy_bytes_drawn.clone()))?;

        Ok(Self {
            registry,
            mnemonics_encoded,
            rejected_requests,
            entropy_failures,
            hash_failures,
            entropy_bytes_drawn,
        })
    }

    /// Brings every counter up to the totals in `stats`.
    ///
    /// Counters only move forward, so stale snapshots are ignored.
    pub fn update(&self, stats: &EncoderStats) {
        advance(&self.mnemonics_encoded, stats.mnemonics_encoded);
        advance(&self.rejected_requests, stats.rejected_requests);
        advance(&self.entropy_failures, stats.entropy_failures);
        advance(&self.hash_failures, stats.hash_failures);
        advance(&self.entropy_bytes_drawn, stats.entropy_bytes_drawn);
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn advance(counter: &IntCounter, total: u64) {
    let current = counter.get();
    if total > current {
        counter.inc_by(total - current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = MetricsRegistry::new();
        assert!(registry.is_ok());
    }

    #[test]
    fn test_metrics_update() {
        let registry = MetricsRegistry::new().unwrap();

        let stats = EncoderStats {
            mnemonics_encoded: 3,
            rejected_requests: 1,
            entropy_failures: 0,
            hash_failures: 0,
            entropy_bytes_drawn: 96,
        };
        registry.update(&stats);

        let output = registry.encode().unwrap();
        assert!(output.contains("bip39_mnemonics_encoded_total 3"));
        assert!(output.contains("bip39_rejected_requests_total 1"));
        assert!(output.contains("bip39_entropy_bytes_drawn_total 96"));
    }

    #[test]
    fn test_stale_snapshot_ignored() {
        let registry = MetricsRegistry::new().unwrap();

        registry.update(&EncoderStats {
            mnemonics_encoded: 5,
            ..Default::default()
        });
        registry.update(&EncoderStats {
            mnemonics_encoded: 2,
            ..Default::default()
        });

        let output = registry.encode().unwrap();
        assert!(output.contains("bip39_mnemonics_encoded_total 5"));
    }

    #[test]
    fn test_metrics_encode() {
        let registry = MetricsRegistry::new().unwrap();
        let output = registry.encode().unwrap();

        assert!(output.contains("bip39_entropy_failures_total"));
        assert!(output.contains("bip39_hash_failures_total"));
    }
}
