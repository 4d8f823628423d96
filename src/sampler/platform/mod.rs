use super::cpu::CumulativeTimeSample;
use super::thermal::ThermalZoneReading;

#[cfg(windows)]
mod windows;

// Real bindings exist on Windows only; other targets compile the degraded
// path, which reads exactly like a failed query.

pub fn system_times() -> Option<CumulativeTimeSample> {
    #[cfg(windows)]
    {
        windows::system_times()
    }
    #[cfg(not(windows))]
    {
        None
    }
}

/// `None` when instrumentation is unreachable; an answered query with no
/// zones is `Some` of an empty vec.
pub fn thermal_zone_readings() -> Option<Vec<ThermalZoneReading>> {
    #[cfg(windows)]
    {
        windows::thermal_zone_readings()
    }
    #[cfg(not(windows))]
    {
        None
    }
}
