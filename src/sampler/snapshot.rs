#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub cpu_usage_percent: f64,
    pub ram_usage_percent: f64,
    /// `None` when no thermal zone answered.
    pub cpu_temperature_celsius: Option<f64>,
}
