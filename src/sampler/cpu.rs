use tracing::debug;

use super::platform;

/// Cumulative idle/kernel/user time since boot, in OS tick units. The zero
/// value stands for "no reading yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CumulativeTimeSample {
    pub idle: u64,
    pub kernel: u64,
    pub user: u64,
}

/// Where cumulative time counters come from. `None` means the query failed
/// this instant; callers treat that as "no change" and try again next tick.
pub trait TimeCounterSource {
    fn read(&mut self) -> Option<CumulativeTimeSample>;
}

#[derive(Debug, Default)]
pub struct SystemTimeCounters;

impl TimeCounterSource for SystemTimeCounters {
    fn read(&mut self) -> Option<CumulativeTimeSample> {
        platform::system_times()
    }
}

/// Computes overall CPU utilization from the delta between two cumulative
/// counter readings. Keeps exactly one previous sample; the first call
/// measures against zero and so reports activity since boot.
pub struct CpuUsageSampler<S = SystemTimeCounters> {
    source: S,
    prev: CumulativeTimeSample,
}

impl Default for CpuUsageSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuUsageSampler {
    pub fn new() -> Self {
        Self::with_source(SystemTimeCounters)
    }
}

impl<S: TimeCounterSource> CpuUsageSampler<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            prev: CumulativeTimeSample::default(),
        }
    }

    /// CPU utilization since the previous call, as a percentage in `[0, 100]`.
    /// A failed read degrades to `0.0` and leaves the stored sample untouched,
    /// so the next successful read still spans the whole elapsed interval.
    pub fn sample(&mut self) -> f64 {
        let Some(cur) = self.source.read() else {
            debug!("time counter read failed; reporting 0.0 for this tick");
            return 0.0;
        };
        let usage = usage_percent(self.prev, cur);
        self.prev = cur;
        usage
    }
}

fn usage_percent(prev: CumulativeTimeSample, cur: CumulativeTimeSample) -> f64 {
    // Counters are monotonic while the machine runs; saturation absorbs a
    // counter reset instead of wrapping into a huge delta.
    let d_idle = cur.idle.saturating_sub(prev.idle);
    let d_kernel = cur.kernel.saturating_sub(prev.kernel);
    let d_user = cur.user.saturating_sub(prev.user);

    // Kernel time includes idle time, so kernel + user spans the interval.
    let busy_total = d_kernel.saturating_add(d_user);
    if busy_total == 0 {
        return 0.0;
    }

    ((1.0 - d_idle as f64 / busy_total as f64) * 100.0).clamp(0.0, 100.0)
}
