use rand::Rng;
use std::time::Duration;

/// Simulated round-trip delay applied before every store call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub min: Duration,
    pub max: Duration,
}

impl Latency {
    pub fn new(min: Duration, max: Duration) -> Self {
        if max < min {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// Fixed delay
    pub fn fixed(delay: Duration) -> Self {
        Self::new(delay, delay)
    }

    /// Range used by the hosted demo's page and portfolio services
    pub fn demo() -> Self {
        Self::new(Duration::from_millis(200), Duration::from_millis(500))
    }

    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }

    pub(crate) async fn wait(latency: Option<Latency>) {
        if let Some(latency) = latency {
            let delay = latency.sample();
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    }
}
