//! Cumulative mobility counters and the statistics derived from them.

use tiersim_metrics::mean;

/// Run-long counters fed by the manager and the engine loop.
#[derive(Debug, Clone, Default)]
pub struct MobilityMetrics {
    /// Rounds where the raw best differed from the attachment. The
    /// hysteresis gate may still refuse the switch.
    pub handover_attempts:       u64,
    /// Switches that cleared the gate.
    pub handovers:               u64,
    pub total_handover_delay_ms: f64,
    /// Tasks submitted / dropped across all rounds.
    pub total_tasks:             u64,
    pub dropped_tasks:           u64,
    /// Per-task RSS at placement time, dB.
    pub rss_samples:             Vec<f64>,
    /// Accumulated out-of-coverage time, ms.
    pub total_outage_ms:         f64,
    /// Per-round placed payload, KB.
    pub throughput_samples:      Vec<f64>,
}

impl MobilityMetrics {
    /// Gated switches per attempt; 0.0 before any attempt.
    pub fn success_ratio(&self) -> f64 {
        if self.handover_attempts == 0 {
            0.0
        } else {
            self.handovers as f64 / self.handover_attempts as f64
        }
    }

    /// Dropped share of all submitted tasks; 0.0 before any submission.
    pub fn drop_rate(&self) -> f64 {
        if self.total_tasks == 0 {
            0.0
        } else {
            self.dropped_tasks as f64 / self.total_tasks as f64
        }
    }

    /// Mean sampled RSS. No samples means nothing was ever heard, which
    /// reads as negative infinity on a dB scale.
    pub fn avg_rss(&self) -> f64 {
        mean(&self.rss_samples).unwrap_or(f64::NEG_INFINITY)
    }

    /// Spread between the best and worst round, KB. 0.0 with no samples.
    pub fn throughput_variation(&self) -> f64 {
        if self.throughput_samples.is_empty() {
            return 0.0;
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &s in &self.throughput_samples {
            lo = lo.min(s);
            hi = hi.max(s);
        }
        hi - lo
    }
}
