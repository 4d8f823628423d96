use std::io::{self, Write};
use std::time::Duration;

use color_eyre::Result;
use vitals::app::Monitor;
use vitals::ui;

const STARTUP_DELAY: Duration = Duration::from_secs(1);
const SAMPLE_INTERVAL: Duration = Duration::from_secs(2);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    #[cfg(feature = "trace-log")]
    init_trace_log()?;

    let mut stdout = io::stdout();
    ui::write_banner(&mut stdout)?;
    tokio::time::sleep(STARTUP_DELAY).await;

    run(&mut stdout).await
}

async fn run(out: &mut impl Write) -> Result<()> {
    let mut monitor = Monitor::new();

    // No exit path of its own; the operator's Ctrl+C ends the process.
    loop {
        let snapshot = monitor.tick();
        ui::draw(out, &snapshot)?;
        tokio::time::sleep(SAMPLE_INTERVAL).await;
    }
}

#[cfg(feature = "trace-log")]
fn init_trace_log() -> Result<()> {
    use color_eyre::eyre::eyre;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}
