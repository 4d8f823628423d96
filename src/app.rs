use tracing::trace;

use crate::sampler::{
    CpuUsageSampler, MemoryUsageSampler, Snapshot, SystemTimeCounters, ThermalSensorSampler,
    TimeCounterSource,
};

/// Owns the three samplers and turns one tick into one [`Snapshot`].
/// Constructed once at startup; the CPU sampler's delta state lives here.
pub struct Monitor<S = SystemTimeCounters> {
    cpu: CpuUsageSampler<S>,
    memory: MemoryUsageSampler,
    thermal: ThermalSensorSampler,
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Monitor {
    pub fn new() -> Self {
        Self::with_cpu_source(SystemTimeCounters)
    }
}

impl<S: TimeCounterSource> Monitor<S> {
    pub fn with_cpu_source(source: S) -> Self {
        Monitor {
            cpu: CpuUsageSampler::with_source(source),
            memory: MemoryUsageSampler::new(),
            thermal: ThermalSensorSampler::new(),
        }
    }

    /// Samples cpu, memory, and thermal in turn and assembles the snapshot.
    /// Never fails; each sampler degrades on its own.
    pub fn tick(&mut self) -> Snapshot {
        let snapshot = Snapshot {
            cpu_usage_percent: self.cpu.sample(),
            ram_usage_percent: self.memory.sample(),
            cpu_temperature_celsius: self.thermal.sample(),
        };
        trace!(
            cpu = snapshot.cpu_usage_percent,
            ram = snapshot.ram_usage_percent,
            temp = ?snapshot.cpu_temperature_celsius,
            "tick sampled"
        );
        snapshot
    }
}
