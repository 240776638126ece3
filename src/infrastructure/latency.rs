//! Simulated I/O latency

use std::thread;
use std::time::Duration;

/// Fixed delay applied before an operation completes.
///
/// Emulates the round trip of a remote call; it has no effect on results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        SimulatedLatency(delay)
    }

    pub fn none() -> Self {
        SimulatedLatency(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.0
    }

    /// Block for the configured delay
    pub fn wait(&self) {
        if !self.0.is_zero() {
            log::debug!(
                "event=simulated_latency module=auth delay_ms={}",
                self.0.as_millis()
            );
            thread::sleep(self.0);
        }
    }
}
