//! serialcmd Console
//!
//! Operator console for a device exposed as a TCP "UART".

use std::io::{self, BufReader};
use std::net::TcpStream;
use std::time::Duration;

use clap::Parser;
use serialcmd::console::{Console, STALE_SETTLE};
use serialcmd::serial::StreamSource;
use serialcmd::{Config, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// serialcmd console
#[derive(Parser, Debug)]
#[command(name = "serialcmd-console")]
#[command(about = "Simple serial console for a serialcmd device")]
struct Args {
    /// Device address (host:port)
    #[arg(short = 'D', long = "dst", default_value = "127.0.0.1:3333")]
    dst: String,

    /// Prompt token the device writes before each read
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Quiet window used when polling the device (milliseconds)
    #[arg(long, default_value = "50")]
    poll_ms: u64,

    /// Discard input already waiting on the line before synchronizing
    #[arg(long)]
    flush_stale: bool,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        tracing::error!("Console error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::builder()
        .prompt(args.prompt.clone())
        .read_retry_delay_ms(args.poll_ms)
        .listen_addr(args.dst.clone())
        .build()?;

    let stream = match TcpStream::connect(&config.listen_addr) {
        Ok(stream) => stream,
        Err(e) => {
            println!("Failed to connect to {}", config.listen_addr);
            return Err(e.into());
        }
    };
    println!("Console connected on {}", config.listen_addr);

    // Reads time out so the console can tell "quiet" from "more coming"
    let timeout = config.read_retry_delay().max(Duration::from_millis(1));
    stream.set_read_timeout(Some(timeout))?;
    let read_stream = stream.try_clone()?;

    let mut console = Console::new(
        StreamSource::new(BufReader::new(read_stream)),
        stream,
        io::stdout(),
        &config,
    );

    if args.flush_stale {
        console.discard_pending(STALE_SETTLE)?;
    }
    console.sync()?;
    console.run_interactive(io::stdin().lock())
}
