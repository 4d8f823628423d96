pub mod cpu;
pub mod memory;
pub mod platform;
pub mod snapshot;
pub mod thermal;

pub use cpu::{CpuUsageSampler, CumulativeTimeSample, SystemTimeCounters, TimeCounterSource};
pub use memory::MemoryUsageSampler;
pub use snapshot::Snapshot;
pub use thermal::ThermalSensorSampler;
