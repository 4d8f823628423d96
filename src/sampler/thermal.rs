use serde::Deserialize;
use tracing::trace;

use super::platform;

/// One row of the ACPI thermal zone class. `CurrentTemperature` is tenths of
/// a Kelvin and may be absent when firmware leaves the property unpopulated.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename = "MSAcpi_ThermalZoneTemperature")]
#[serde(rename_all = "PascalCase")]
pub struct ThermalZoneReading {
    pub current_temperature: Option<u32>,
}

#[derive(Debug, Default)]
pub struct ThermalSensorSampler;

impl ThermalSensorSampler {
    pub fn new() -> Self {
        ThermalSensorSampler
    }

    /// Temperature of the first thermal zone in Celsius, `None` whenever the
    /// instrumentation subsystem, the query, or the property is unavailable.
    pub fn sample(&self) -> Option<f64> {
        let rows = platform::thermal_zone_readings()?;
        let celsius = first_zone_celsius(rows);
        trace!(?celsius, "thermal zone sampled");
        celsius
    }
}

// Only the first zone counts; a first zone without the property makes the
// whole reading unavailable.
fn first_zone_celsius(rows: Vec<ThermalZoneReading>) -> Option<f64> {
    rows.into_iter()
        .next()?
        .current_temperature
        .map(celsius_from_decikelvin)
}

fn celsius_from_decikelvin(raw: u32) -> f64 {
    f64::from(raw) / 10.0 - 273.15
}
