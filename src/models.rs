// Domain models for the sample table and derived series.

use serde::Deserialize;

/// CSV header name for the CPU column.
pub const CPU_COLUMN: &str = "CPUPercent";
/// CSV header name for the memory column.
pub const MEMORY_COLUMN: &str = "MemoryUsageInBytes";

/// One monitoring sample. Row order stands in for sample time; there is no
/// timestamp column. Additional CSV columns are ignored on load.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageSample {
    #[serde(rename = "CPUPercent")]
    pub cpu_percent: f64,
    #[serde(rename = "MemoryUsageInBytes")]
    pub memory_usage_in_bytes: u64,
}

/// The whole parsed log, immutable after load.
#[derive(Debug, Clone)]
pub struct SampleTable {
    samples: Vec<UsageSample>,
}

impl SampleTable {
    pub fn new(samples: Vec<UsageSample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// CPU percent values in row order. Conventionally 0-100 but never clamped.
    pub fn cpu_series(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.cpu_percent).collect()
    }

    /// Memory usage values (bytes) in row order.
    pub fn memory_series(&self) -> Vec<u64> {
        self.samples.iter().map(|s| s.memory_usage_in_bytes).collect()
    }
}

/// Min/max of one series. Ephemeral; computed once per run for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> SeriesSummary<T> {
    /// Returns `None` for an empty series (the loader rejects empty tables,
    /// so callers inside this crate never see that case).
    pub fn of(values: &[T]) -> Option<Self> {
        let first = *values.first()?;
        let mut summary = SeriesSummary {
            min: first,
            max: first,
        };
        for &v in &values[1..] {
            if v < summary.min {
                summary.min = v;
            }
            if v > summary.max {
                summary.max = v;
            }
        }
        Some(summary)
    }
}
