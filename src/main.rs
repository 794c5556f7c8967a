use clap::Parser;
use std::error::Error;
use tracing::info;

use fitstats::packet::SensorPacket;

/// Sample sensor feed, as it would arrive off the wire.
const SAMPLE_FEED: &str = r#"[
    { "code": "SWM", "values": [720, 1, 80, 25, 40] },
    { "code": "RUN", "values": [15000, 1, 75] },
    { "code": "WLK", "values": [9000, 1, 75, 180] }
]"#;

/// per-session fitness statistics from raw sensor packets
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {}

fn main() -> Result<(), Box<dyn Error>> {
    let _cli = Cli::parse();
    init_logging();

    let feed: Vec<SensorPacket> = serde_json::from_str(SAMPLE_FEED)?;
    info!("processing {} sensor packets", feed.len());

    for packet in &feed {
        let workout = packet.decode()?;
        println!("{}", workout.summary());
    }

    Ok(())
}

// Filter comes from RUST_LOG (default `info`); logs go to stderr so stdout
// carries only summary lines.
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}
