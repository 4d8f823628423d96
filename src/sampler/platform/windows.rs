use tracing::debug;
use windows_sys::Win32::Foundation::FILETIME;
use windows_sys::Win32::System::Threading::GetSystemTimes;
use wmi::{COMLibrary, WMIConnection};

use crate::sampler::cpu::CumulativeTimeSample;
use crate::sampler::thermal::ThermalZoneReading;

const THERMAL_NAMESPACE: &str = "root\\WMI";
const THERMAL_ZONE_QUERY: &str = "SELECT * FROM MSAcpi_ThermalZoneTemperature";

pub fn system_times() -> Option<CumulativeTimeSample> {
    unsafe {
        let mut idle = std::mem::zeroed::<FILETIME>();
        let mut kernel = std::mem::zeroed::<FILETIME>();
        let mut user = std::mem::zeroed::<FILETIME>();
        if GetSystemTimes(&mut idle, &mut kernel, &mut user) == 0 {
            return None;
        }
        Some(CumulativeTimeSample {
            idle: filetime_ticks(idle),
            kernel: filetime_ticks(kernel),
            user: filetime_ticks(user),
        })
    }
}

fn filetime_ticks(ft: FILETIME) -> u64 {
    (u64::from(ft.dwHighDateTime) << 32) | u64::from(ft.dwLowDateTime)
}

// One full session per call; both handles drop on every exit path. Repeated
// COM initialization on this thread is treated as success by the wmi crate.
pub fn thermal_zone_readings() -> Option<Vec<ThermalZoneReading>> {
    let com = match COMLibrary::new() {
        Ok(com) => com,
        Err(e) => {
            debug!(error = %e, "COM initialization failed");
            return None;
        }
    };
    let wmi = match WMIConnection::with_namespace_path(THERMAL_NAMESPACE, com) {
        Ok(wmi) => wmi,
        Err(e) => {
            debug!(error = %e, "thermal namespace connection failed");
            return None;
        }
    };
    match wmi.raw_query(THERMAL_ZONE_QUERY) {
        Ok(rows) => Some(rows),
        Err(e) => {
            debug!(error = %e, "thermal zone query failed");
            None
        }
    }
}
