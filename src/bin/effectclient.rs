use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use effectclient2_rs::animation::Wave;
use effectclient2_rs::client::UdpClient;
use effectclient2_rs::config;

#[derive(Parser)]
#[command(about = "Animates a rainbow wave on an effect server's lights")]
struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Effect server address, e.g. valot.party:9909
    #[arg(short, long)]
    addr: Option<String>,

    /// Nick to tag packets with
    #[arg(short, long)]
    nick: Option<String>,

    /// Number of lights to animate
    #[arg(short, long)]
    lights: Option<u8>,

    /// Milliseconds to sleep between frames
    #[arg(short, long)]
    frame_ms: Option<u64>,
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args = Cli::parse();

    let mut cfg = match &args.config {
        Some(path) => config::read_config(path)?,
        None => config::Root::default(),
    };
    if let Some(addr) = args.addr {
        cfg.client.addr = addr;
    }
    if let Some(nick) = args.nick {
        cfg.client.nick = nick;
    }
    if let Some(lights) = args.lights {
        cfg.animation.light_count = lights;
    }
    if let Some(frame_ms) = args.frame_ms {
        cfg.animation.frame_millis = frame_ms;
    }
    config::validate(&cfg)?;

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))
            .map_err(|_| io::Error::from(io::ErrorKind::Other))?;
    }

    let mut client = UdpClient::new(&cfg.client.addr)?;
    let mut wave = Wave::new(cfg.animation.light_count, cfg.animation.phase_step);
    let frame_time = Duration::from_millis(cfg.animation.frame_millis);

    log::info!(
        "Sending {} lights to {} as {}",
        cfg.animation.light_count,
        cfg.client.addr,
        cfg.client.nick
    );

    // Best-effort cadence: sleep between frames, no drift correction.
    while running.load(Ordering::SeqCst) {
        client.set(&cfg.client.nick, &wave.frame())?;
        wave.advance();
        std::thread::sleep(frame_time);
    }

    log::info!("Interrupted, blacking out");
    client.set(&cfg.client.nick, &wave.blackout())?;

    Ok(())
}
