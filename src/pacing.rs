use std::thread;
use std::time::Duration;

use rand::Rng;
use rand::rngs::ThreadRng;

/// Called after each extracted record. Implementations may block.
pub trait Pacer {
    fn pause(&mut self, index: usize, total: usize);
}

/// Sleeps for a uniformly random duration in `[min, max]` after every record.
pub struct RandomPacer<R = ThreadRng> {
    min: Duration,
    max: Duration,
    rng: R,
}

impl RandomPacer {
    pub fn new() -> Self {
        Self::with_rng(Duration::from_millis(500), Duration::from_millis(1500), rand::thread_rng())
    }
}

impl Default for RandomPacer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPacer<R> {
    pub fn with_rng(min: Duration, max: Duration, rng: R) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        RandomPacer { min, max, rng }
    }

    pub fn next_delay(&mut self) -> Duration {
        let secs = self.rng.gen_range(self.min.as_secs_f64()..=self.max.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}

impl<R: Rng> Pacer for RandomPacer<R> {
    fn pause(&mut self, _index: usize, _total: usize) {
        thread::sleep(self.next_delay());
    }
}

pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self, _index: usize, _total: usize) {}
}
