//! serialcmd Device Binary
//!
//! Runs the interpreter on stdin/stdout, or exposes it as a TCP "UART".

use std::io::{self, BufReader, BufWriter};
use std::net::TcpListener;

use clap::Parser;
use serialcmd::platform::{parse_mac, HostPlatform};
use serialcmd::serial::StreamSource;
use serialcmd::{Config, Result, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// serialcmd device
#[derive(Parser, Debug)]
#[command(name = "serialcmd-device")]
#[command(about = "Line-oriented serial command interpreter")]
#[command(version)]
struct Args {
    /// Serve one TCP operator at a time on this address instead of stdin/stdout
    #[arg(short, long)]
    listen: Option<String>,

    /// Line buffer capacity in bytes (including terminator)
    #[arg(short, long, default_value = "128")]
    capacity: usize,

    /// Delay between input polls while no data is available (milliseconds)
    #[arg(short, long, default_value = "50")]
    retry_ms: u64,

    /// Prompt token written before each read
    #[arg(short, long, default_value = "> ")]
    prompt: String,

    /// Hardware address reported by `mac` (XX:XX:XX:XX:XX:XX)
    #[arg(short, long, value_parser = parse_mac)]
    mac: Option<[u8; 6]>,
}

fn main() {
    // Logs go to stderr; stdout is the serial line
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,serialcmd=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = Config::builder()
        .line_capacity(args.capacity)
        .read_retry_delay_ms(args.retry_ms)
        .prompt(args.prompt);
    if let Some(mac) = args.mac {
        builder = builder.mac_address(mac);
    }
    if let Some(addr) = &args.listen {
        builder = builder.listen_addr(addr);
    }

    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("serialcmd device v{}", serialcmd::VERSION);
    tracing::info!("Line capacity: {} bytes", config.line_capacity);

    let result = if args.listen.is_some() {
        serve_tcp(&config)
    } else {
        serve_stdio(&config)
    };

    if let Err(e) = result {
        tracing::error!("Device error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Device stopped");
}

/// One session over the process's own stdin/stdout
fn serve_stdio(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let platform = HostPlatform::from_config(config);

    let mut session = Session::new(
        StreamSource::new(stdin.lock()),
        stdout.lock(),
        platform,
        config,
    );
    session.run()
}

/// Accept operators one at a time, each getting a fresh session and banner
fn serve_tcp(config: &Config) -> Result<()> {
    let listener = TcpListener::bind(&config.listen_addr)?;
    tracing::info!("Serial UART listening on {}", listener.local_addr()?);

    let platform = HostPlatform::from_config(config);

    for stream in listener.incoming() {
        let stream = match stream {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!("Failed to accept operator: {}", e);
                continue;
            }
        };

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        tracing::info!("Operator connected from {}", peer_addr);

        stream.set_nodelay(true)?;
        let read_stream = stream.try_clone()?;

        let mut session = Session::new(
            StreamSource::new(BufReader::new(read_stream)),
            BufWriter::new(stream),
            &platform,
            config,
        );
        match session.run() {
            Ok(()) => tracing::info!("Operator {} disconnected", peer_addr),
            Err(e) => tracing::warn!("Session with {} ended: {}", peer_addr, e),
        }
    }

    Ok(())
}
