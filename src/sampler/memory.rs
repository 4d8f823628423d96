use sysinfo::System;

pub struct MemoryUsageSampler {
    sys: System,
}

impl Default for MemoryUsageSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryUsageSampler {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        MemoryUsageSampler { sys }
    }

    /// Physical memory in use, as a percentage in `[0, 100]`.
    pub fn sample(&mut self) -> f64 {
        self.sys.refresh_memory();
        usage_percent(self.sys.total_memory(), self.sys.available_memory())
    }
}

/// `(total - available) / total`, in percent. A failed or unpopulated query
/// reports zero totals and degrades to `0.0`.
pub(crate) fn usage_percent(total_bytes: u64, available_bytes: u64) -> f64 {
    if total_bytes == 0 {
        return 0.0;
    }
    let used = total_bytes.saturating_sub(available_bytes);
    (used as f64 / total_bytes as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_from_totals() {
        let pct = usage_percent(16_000_000_000, 4_000_000_000);
        assert!((pct - 75.0).abs() < f64::EPSILON);
        let pct = usage_percent(8_000_000_000, 2_000_000_000);
        assert!((pct - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_total_degrades_to_zero() {
        assert_eq!(usage_percent(0, 0), 0.0);
        assert_eq!(usage_percent(0, 4_000_000_000), 0.0);
    }

    #[test]
    fn available_above_total_clamps_to_zero() {
        assert_eq!(usage_percent(100, 200), 0.0);
    }

    #[test]
    fn fully_used_memory_is_one_hundred_percent() {
        assert_eq!(usage_percent(8_000_000_000, 0), 100.0);
    }

    #[test]
    fn live_sample_is_a_percentage() {
        let mut sampler = MemoryUsageSampler::new();
        let pct = sampler.sample();
        assert!((0.0..=100.0).contains(&pct));
    }
}
