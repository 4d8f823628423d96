use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::sampler::snapshot::Snapshot;

/// Usage above this level gets a warning line in the report.
pub const CPU_WARN_PERCENT: f64 = 85.0;
pub const RAM_WARN_PERCENT: f64 = 85.0;

const RULE: &str = "=============================";

pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Starting vitals...")?;
    out.flush()
}

pub fn draw(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write_report(out, snapshot)?;
    out.flush()
}

/// The fixed text layout with no screen control; tests render this into a
/// plain byte buffer.
pub fn write_report(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "         HOST VITALS")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    writeln!(out, "CPU Usage : {:.1} %", snapshot.cpu_usage_percent)?;
    writeln!(out, "RAM Usage : {:.1} %", snapshot.ram_usage_percent)?;
    writeln!(out)?;
    if snapshot.cpu_usage_percent > CPU_WARN_PERCENT {
        writeln!(out, "> WARNING: High CPU usage!")?;
    }
    if snapshot.ram_usage_percent > RAM_WARN_PERCENT {
        writeln!(out, "> WARNING: High RAM usage!")?;
    }
    match snapshot.cpu_temperature_celsius {
        Some(celsius) => writeln!(out, "CPU Temp  : {celsius:.1} \u{b0}C")?,
        None => writeln!(out, "CPU Temp  : Not Available")?,
    }
    writeln!(out)?;
    writeln!(out, "Press Ctrl+C to exit")?;
    Ok(())
}
