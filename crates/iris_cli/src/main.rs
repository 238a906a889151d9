use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use iris_core::{FaceSimulator, IrisConfig};
use iris_osc::OscPublisher;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Synthetic eye/face telemetry publisher — a stand-in signal source when
/// no real eye tracker is connected.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// OSC receiver host
    #[arg(long)]
    host: Option<String>,

    /// OSC receiver port
    #[arg(long)]
    port: Option<u16>,

    /// Target tick rate in Hz
    #[arg(long)]
    hz: Option<f32>,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Also publish the raw mood value as a debug channel
    #[arg(long)]
    send_mood: bool,

    /// Seconds between diagnostic log lines (0 disables them)
    #[arg(long)]
    print_every: Option<f32>,

    /// Optional TOML config file with tuning overrides
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    // Precedence: CLI flags > env vars > config file > defaults.
    let mut config = IrisConfig::load_or_default(args.config.as_deref());
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(hz) = args.hz {
        config.rate_hz = hz;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(print_every) = args.print_every {
        config.print_every = print_every;
    }
    if args.send_mood {
        config.send_mood = true;
    }

    anyhow::ensure!(
        config.rate_hz >= 1.0 && config.rate_hz.is_finite(),
        "tick rate must be at least 1 Hz (got {})",
        config.rate_hz
    );

    let target: SocketAddr = (config.host.as_str(), config.port)
        .to_socket_addrs()
        .with_context(|| format!("cannot resolve OSC target {}:{}", config.host, config.port))?
        .next()
        .with_context(|| format!("no address for OSC target {}:{}", config.host, config.port))?;

    let publisher = OscPublisher::bind(target).await?;
    let mut sim = FaceSimulator::new(config.face.clone(), config.seed);

    info!(
        "Publishing synthetic eye telemetry to {} at {} Hz",
        target, config.rate_hz
    );
    if let Some(seed) = config.seed {
        info!("Seeded run ({}): output is reproducible", seed);
    }

    let period = Duration::from_secs_f32(1.0 / config.rate_hz);
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let mut last_tick = Instant::now();
    let mut next_log = last_tick + Duration::from_secs_f32(config.print_every.max(0.0));

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let now = Instant::now();
                // Feed the measured elapsed time, not the nominal period,
                // so simulation speed tracks the wall clock under
                // scheduling jitter.
                let dt = now.duration_since(last_tick).as_secs_f32();
                last_tick = now;

                let snap = sim.step(dt);
                publisher.publish(&snap, config.send_mood).await;

                if config.print_every > 0.0 && now >= next_log {
                    next_log = now + Duration::from_secs_f32(config.print_every);
                    info!(
                        "L({:+.2},{:+.2}) R({:+.2},{:+.2}) pupil={:.2} blink={:.2} mood={:+.2} lidL={:.2} lidR={:.2}",
                        snap.gaze_left.x,
                        snap.gaze_left.y,
                        snap.gaze_right.x,
                        snap.gaze_right.y,
                        snap.pupil,
                        snap.blink,
                        snap.mood,
                        snap.eyelid_left,
                        snap.eyelid_right,
                    );
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, shutting down");
                break;
            }
        }
    }

    Ok(())
}
