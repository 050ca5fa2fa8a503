//! Step-duration telemetry: a ring of recent samples plus a growing all-time log.

use crate::error::{LifeError, Result};

/// Smallest window that is rejected; capacities must be strictly greater.
pub const MIN_WINDOW_CAPACITY: usize = 10;

/// Recent and all-time step durations, in seconds.
///
/// `all_time` is pre-sized in steps of `window_capacity` and always holds
/// exactly `all_time_capacity` slots. Unwritten slots are `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryWindow {
    recent: Vec<f64>,
    all_time: Vec<f64>,
    window_capacity: usize,
}

impl HistoryWindow {
    pub fn new(window_capacity: usize) -> Result<Self> {
        if window_capacity <= MIN_WINDOW_CAPACITY {
            tracing::error!(window_capacity, "History size must be greater than 10");
            return Err(LifeError::HistoryCapacity {
                capacity: window_capacity,
            });
        }
        Ok(Self {
            recent: vec![0.0; window_capacity],
            all_time: vec![0.0; window_capacity],
            window_capacity,
        })
    }

    pub fn window_capacity(&self) -> usize {
        self.window_capacity
    }

    pub fn all_time_capacity(&self) -> usize {
        self.all_time.len()
    }

    /// Ring buffer slots, indexed by `iteration % window_capacity`.
    pub fn recent(&self) -> &[f64] {
        &self.recent
    }

    pub fn all_time(&self) -> &[f64] {
        &self.all_time
    }

    /// Stores the duration of step `iteration_index`.
    ///
    /// The all-time log grows by one window right after its last slot is
    /// written, so consecutive indices starting at 0 always fit.
    pub fn record(&mut self, duration: f64, iteration_index: usize) -> Result<()> {
        let capacity = self.all_time.len();
        if iteration_index >= capacity {
            return Err(LifeError::HistoryIndexOutOfRange {
                index: iteration_index,
                capacity,
            });
        }

        self.recent[iteration_index % self.window_capacity] = duration;
        self.all_time[iteration_index] = duration;

        if iteration_index == capacity - 1 {
            self.all_time.resize(capacity + self.window_capacity, 0.0);
            tracing::debug!(
                from = capacity,
                to = self.all_time.len(),
                "History capacity grown"
            );
        }
        Ok(())
    }

    /// The recent window in chronological order (oldest first), given the
    /// index the next sample will be written to.
    pub fn recent_in_order(&self, next_index: usize) -> Vec<f64> {
        let cap = self.window_capacity;
        (0..cap)
            .map(|j| self.recent[(next_index + j) % cap])
            .collect()
    }

    /// The whole all-time log squeezed into `window_capacity` bucket averages.
    pub fn all_time_buckets(&self) -> Vec<f64> {
        downsample(&self.all_time, self.all_time.len(), self.window_capacity)
    }

    /// Drops every sample and starts over with the same window capacity.
    pub fn reset(&mut self) -> Result<()> {
        *self = Self::new(self.window_capacity)?;
        Ok(())
    }
}

/// Mean of `samples`, or `0.0` if any sample is exactly zero.
///
/// Zero marks a slot that was never measured; an empty slice also yields
/// `0.0`.
pub fn bucket_average(samples: &[f64]) -> f64 {
    if samples.is_empty() || samples.iter().any(|&s| s == 0.0) {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Reduces the first `total_size` samples to `num_buckets` equal, contiguous
/// bucket averages. The remainder past `(total_size / num_buckets) * num_buckets`
/// is ignored.
pub fn downsample(samples: &[f64], total_size: usize, num_buckets: usize) -> Vec<f64> {
    if num_buckets == 0 {
        return Vec::new();
    }
    let total = total_size.min(samples.len());
    let bucket_size = total / num_buckets;
    (0..num_buckets)
        .map(|i| {
            let start = i * bucket_size;
            bucket_average(&samples[start..start + bucket_size])
        })
        .collect()
}
