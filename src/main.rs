use anyhow::Result;
use pulsewatch::config::MonitorConfig;
use pulsewatch::core::RhythmMode;
use pulsewatch::engine::{MonitorEvent, MonitorSession};
use pulsewatch::observability::generate_report;
use tokio::sync::mpsc;

const TICKS_PER_MODE: u64 = 40;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => MonitorConfig::load(&path).await?,
        None => MonitorConfig::default(),
    };

    println!("PulseWatch - Synthetic Rhythm Monitor");
    println!("=====================================\n");

    let mut session = MonitorSession::from_config(&config)?;
    let (tx, mut rx) = mpsc::channel::<MonitorEvent>(config.channel_capacity);

    let printer = tokio::spawn(async move {
        let mut received = 0u64;
        while let Some(event) = rx.recv().await {
            received += 1;
            if received % 10 == 0 {
                println!(
                    "  HR {:>5.1} BPM | RR {:>6.1} ms | SpO2 {:>4.1}% | {} -> {} ({:.2}, {})",
                    event.reading.heart_rate,
                    event.reading.r_peak_interval,
                    event.reading.oxygen_saturation,
                    event.reading.motion_status().label(),
                    event.result.kind,
                    event.result.confidence,
                    event.result.severity,
                );
            }
        }
    });

    for mode in RhythmMode::ALL {
        println!("--- Simulating {} ---", mode);
        session.set_mode(mode);
        session.run(Some(TICKS_PER_MODE), tx.clone()).await?;
    }
    drop(tx);
    printer.await?;

    println!("\n{}", generate_report(&session.metrics().snapshot()));
    Ok(())
}
