use std::thread;
use std::time::Duration;

use vitals::app::Monitor;
use vitals::sampler::{Snapshot, ThermalSensorSampler};

fn assert_in_range(snapshot: &Snapshot) {
    assert!(
        (0.0..=100.0).contains(&snapshot.cpu_usage_percent),
        "cpu usage out of range: {}",
        snapshot.cpu_usage_percent
    );
    assert!(
        (0.0..=100.0).contains(&snapshot.ram_usage_percent),
        "ram usage out of range: {}",
        snapshot.ram_usage_percent
    );
}

#[test]
fn consecutive_live_ticks_stay_in_range() {
    let mut monitor = Monitor::new();

    let first = monitor.tick();
    assert_in_range(&first);

    thread::sleep(Duration::from_millis(200));

    let second = monitor.tick();
    assert_in_range(&second);
    if let Some(celsius) = second.cpu_temperature_celsius {
        assert!(
            (-273.15..=1000.0).contains(&celsius),
            "implausible temperature: {celsius}"
        );
    }
}

#[test]
fn thermal_sampling_never_panics() {
    let sampler = ThermalSensorSampler::new();
    let _ = sampler.sample();
}
