use std::io::BufRead;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use clipnum::config::{Cli, Command, WatchConfig};
use clipnum::obfuscate::{is_number, process_line};
use clipnum::{ClipboardAccess, ClipboardWatcher, SystemClipboard};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match cli.command {
        Some(Command::Convert { values }) => convert(values, rng),
        None => watch(WatchConfig::default(), rng).await,
    }
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(verbose > 1)
        .init();
}

/// Print obfuscated versions of the given values, or of stdin lines.
fn convert(values: Vec<String>, mut rng: StdRng) -> Result<()> {
    let values = if values.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read stdin")?
    } else {
        values
    };

    for value in values {
        if is_number(&value) {
            println!("{}", process_line(&value, &mut rng));
        } else {
            println!("{}", value);
        }
    }

    Ok(())
}

async fn watch(config: WatchConfig, rng: StdRng) -> Result<()> {
    println!("Clipboard number obfuscator");
    println!("{}", "=".repeat(60));

    let mut clipboard = SystemClipboard::open()
        .context("Clipboard is not available; a running X11 or Wayland session is required")?;
    clipboard
        .read_text()
        .context("Clipboard is not readable")?;
    println!("Clipboard is available.");

    println!("Watching the clipboard...");
    println!("Numbers copied to the clipboard are replaced automatically.");
    println!("Press Ctrl+C to stop.");

    let mut watcher = ClipboardWatcher::new(clipboard, rng, config);

    tokio::select! {
        _ = watcher.run() => {}
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl+C")?;
        }
    }

    info!("Clipboard monitoring stopped");
    Ok(())
}
